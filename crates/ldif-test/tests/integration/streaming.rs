//! Streaming decode and encode against readers and writers.

use std::cell::Cell;
use std::io::{BufReader, Read};
use std::rc::Rc;

use ldif_test::component::ldif::{
    EncodeError, Entry, ParseErrorKind, RfcError, RfcResult, Value, decode_eager, decode_lazy,
    encode, parse, serialize,
};

use super::helpers::people;

/// Reader that records how many bytes have been handed out.
struct CountingReader<'a> {
    data: &'a [u8],
    consumed: Rc<Cell<usize>>,
}

impl Read for CountingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let read = self.data.read(buf)?;
        self.consumed.set(self.consumed.get() + read);
        Ok(read)
    }
}

fn reencode(input: &str) -> RfcResult<String> {
    let entries = parse(input)?;
    Ok(serialize(&entries)?)
}

fn encode_one(entry: &Entry) -> RfcResult<String> {
    Ok(serialize(std::slice::from_ref(entry))?)
}

#[test_log::test]
fn lazy_decoder_reads_incrementally() -> anyhow::Result<()> {
    let document = serialize(&people(1000))?;
    let consumed = Rc::new(Cell::new(0));
    let reader = BufReader::with_capacity(
        256,
        CountingReader {
            data: document.as_bytes(),
            consumed: Rc::clone(&consumed),
        },
    );

    let mut decoder = decode_lazy(reader);
    let first = decoder.next().expect("first entry")?;
    assert_eq!(first.dn(), Some("uid=user0,ou=people,dc=example,dc=org"));

    tracing::debug!(consumed = consumed.get(), total = document.len(), "After first entry");
    assert!(consumed.get() < document.len() / 100);

    let rest = decoder.collect::<Result<Vec<_>, _>>()?;
    assert_eq!(rest.len(), 999);
    assert_eq!(consumed.get(), document.len());

    Ok(())
}

#[test_log::test]
fn lazy_decoder_stops_after_error() {
    let input = "dn: cn=a\n\ndn: cn=b\n\nbroken\n\ndn: cn=c\n";
    let mut decoder = decode_lazy(input.as_bytes());

    assert_eq!(decoder.next().unwrap().unwrap().dn(), Some("cn=a"));
    assert_eq!(decoder.next().unwrap().unwrap().dn(), Some("cn=b"));

    let err = decoder.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingColon);
    assert_eq!(err.line, 5);

    assert!(decoder.next().is_none());
    assert!(decoder.next().is_none());
}

#[test_log::test]
fn eager_decode_has_no_partial_result() {
    let input = "dn: cn=a\n\ndn: cn=b\nbad line\n";
    let err = decode_eager(input.as_bytes()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingColon);
    assert_eq!(err.line, 4);
}

#[test_log::test]
fn encode_counts_entries() -> anyhow::Result<()> {
    let entries = people(25);
    let mut output = Vec::new();

    let count = encode(&mut output, &entries)?;
    assert_eq!(count, 25);
    assert_eq!(decode_eager(output.as_slice())?, entries);

    Ok(())
}

#[test_log::test]
fn encode_error_keeps_earlier_entries() {
    let good = Entry::new([("dn", "cn=good")]);
    let bad = Entry::new([("dn", Value::from("cn=bad")), ("", Value::from("x"))]);
    let mut output = Vec::new();

    let err = encode(&mut output, [&good, &bad, &good]).unwrap_err();
    assert!(matches!(err, EncodeError::EmptyAttributeName { entry: 2 }));

    // nothing from the rejected entry reaches the writer
    assert_eq!(String::from_utf8(output).unwrap(), "version: 1\n\ndn: cn=good\n\n");
}

#[test_log::test]
fn crate_error_wraps_both_directions() {
    assert_eq!(reencode("dn:cn=a\n").unwrap(), "version: 1\n\ndn: cn=a\n\n");

    let err = reencode("dn: cn=a\n\n orphan\n").unwrap_err();
    assert!(matches!(err, RfcError::ParseError(_)));
    assert!(err.to_string().contains("line 3"));

    let unsafe_entry = Entry::new([("description", " leading space")]);
    let err = encode_one(&unsafe_entry).unwrap_err();
    assert!(matches!(err, RfcError::EncodeError(EncodeError::UnsafeValue { .. })));
}

#[test_log::test]
fn entries_serialize_to_json() -> anyhow::Result<()> {
    let entries = parse("dn: cn=a\nphoto:: d29ybGQ=\nsee:< http://example.org/\n")?;
    let json = serde_json::to_value(&entries[0])?;

    assert_eq!(
        json,
        serde_json::json!({
            "attributes": [
                ["dn", {"type": "text", "value": "cn=a"}],
                ["photo", {"type": "binary", "value": "d29ybGQ="}],
                ["see", {"type": "url", "value": "http://example.org/"}],
            ]
        })
    );

    Ok(())
}
