//! End-to-end exercise of the codec the way a batch reader uses it:
//! one reused decoder and buffer over a mixed stream of lines, bad
//! lines counted and skipped rather than aborting the batch.

use timerlog::{
    ActionRecord, CustomValueRecord, EventRecord, FixedClock, LineDecoder, Record, RecordError,
    RequestRecord, TransactionRecord, TypeCode,
};

const CLOCK: FixedClock = FixedClock(1_700_000_000_000);

fn sample_records() -> Vec<Record> {
    let mut action = ActionRecord::new("OpenHomepage", &CLOCK);
    action.timing.run_time = 312;

    let mut request = RequestRecord::new("OpenHomepage.1", &CLOCK);
    request.timing.run_time = 153;
    request.bytes_sent = 450;
    request.bytes_received = 20_480;
    request.response_code = 200;
    request.url = "https://shop.example.com/?a=1,b=2".to_string();
    request.content_type = "text/html".to_string();
    request.http_method = "GET".to_string();
    request.request_id = "k3NslQpx".to_string();
    request.ip_addresses = vec!["192.0.2.10".to_string()];

    let mut transaction = TransactionRecord::new("TVisit", &CLOCK);
    transaction.timing.run_time = 4_810;
    transaction.timing.failed = true;
    transaction.stack_trace = Some("error: timeout\nat Page.load(Page.java:44)".to_string());
    transaction.failed_action_name = "OpenHomepage".to_string();
    transaction.test_user_number = "3".to_string();
    transaction.directory_name = "1700000000000".to_string();

    let mut event = EventRecord::new("Slow response", &CLOCK);
    event.test_case_name = "TVisit".to_string();
    event.message = "response took 4,810 ms, threshold is 3,000 ms".to_string();

    let mut value = CustomValueRecord::new("CacheHitRate", &CLOCK);
    value.value = 0.93;

    vec![
        Record::Action(action),
        Record::Request(request),
        Record::Transaction(transaction),
        Record::Event(event),
        Record::CustomValue(value),
    ]
}

#[test]
fn mixed_batch_survives_the_wire() {
    let records = sample_records();

    let log: Vec<String> = records
        .iter()
        .map(|r| r.to_line().unwrap())
        .collect();

    // every line is exactly one record, no line terminators inside
    for line in &log {
        assert!(!line.contains('\n'));
        assert!(!line.contains('\r'));
    }

    let mut decoder = LineDecoder::new();
    let mut parsed = Vec::new();
    for line in &log {
        let mut buf = line.as_bytes().to_vec();
        parsed.push(Record::parse_line(&mut buf, &mut decoder).unwrap());
    }

    assert_eq!(parsed, records);
}

#[test]
fn bad_lines_are_counted_not_fatal() {
    let log = [
        "A,Login,1700000000000,42,false",
        "A,\"broken,1700000000000,42,false",
        "X,what,1700000000000",
        "R,Login,1700000000000,12,false,1,2",
        "T,TVisit,1700000000000,100,false,",
    ];

    let mut decoder = LineDecoder::new();
    let mut ok = 0;
    let mut csv_errors = 0;
    let mut record_errors = 0;

    for line in log {
        let mut buf = line.as_bytes().to_vec();
        match Record::parse_line(&mut buf, &mut decoder) {
            Ok(_) => ok += 1,
            Err(RecordError::Csv(_)) => csv_errors += 1,
            Err(_) => record_errors += 1,
        }
    }

    assert_eq!(ok, 2);
    assert_eq!(csv_errors, 1);
    assert_eq!(record_errors, 2);
}

#[test]
fn legacy_lines_from_old_producers_still_decode() {
    let mut decoder = LineDecoder::new();

    // request with the oldest supported width
    let mut buf = b"R,Login,1700000000000,12,false,1,2,200".to_vec();
    let record = Record::parse_line(&mut buf, &mut decoder).unwrap();
    assert_eq!(record.type_code(), TypeCode::Request);

    // transaction without user number and directory name
    let mut buf = b"T,TVisit,1700000000000,100,true,trace,Login".to_vec();
    let record = Record::parse_line(&mut buf, &mut decoder).unwrap();
    match record {
        Record::Transaction(t) => {
            assert_eq!(t.failed_action_name, "Login");
            assert_eq!(t.directory_name, "");
        }
        other => panic!("wrong kind: {other:?}"),
    }
}

#[test]
fn field_lists_roundtrip_without_the_record_layer() {
    let fields = vec![
        "R".to_string(),
        "name with, comma".to_string(),
        "a \"quoted\" part".to_string(),
        String::new(),
        "multi\nline".to_string(),
    ];

    let line = timerlog::csv::encode_line(&fields).unwrap();
    assert_eq!(timerlog::csv::decode_line(&line).unwrap(), fields);

    let mut decoder = LineDecoder::new();
    let mut buf = line.into_bytes();
    let decoded = decoder.decode(&mut buf).unwrap();
    let via_spans: Vec<String> = decoded
        .iter()
        .map(|f| String::from_utf8(f.to_vec()).unwrap())
        .collect();
    assert_eq!(via_spans, fields);
}
