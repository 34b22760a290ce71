use super::*;
use crate::clock::FixedClock;
use crate::csv::{CsvError, LineDecoder};

const CLOCK: FixedClock = FixedClock(1_700_000_000_000);

fn parse(line: &str) -> Result<Record, RecordError> {
    Record::parse_str(line)
}

#[test]
fn type_code_chars_roundtrip() {
    let codes = [
        TypeCode::Action,
        TypeCode::CustomTimer,
        TypeCode::Event,
        TypeCode::PageLoad,
        TypeCode::Request,
        TypeCode::Transaction,
        TypeCode::CustomValue,
        TypeCode::WebVital,
    ];
    for code in codes {
        assert_eq!(TypeCode::from_char(code.as_char()), Some(code));
    }
    assert_eq!(TypeCode::from_char('X'), None);
    assert_eq!(TypeCode::from_char('a'), None);
}

#[test]
fn action_record_roundtrips() {
    let mut record = ActionRecord::new("Login", &CLOCK);
    record.timing.run_time = 42;
    record.timing.failed = false;

    let line = Record::Action(record.clone()).to_line().unwrap();
    assert_eq!(line, "A,Login,1700000000000,42,false");

    match parse(&line).unwrap() {
        Record::Action(parsed) => assert_eq!(parsed, record),
        other => panic!("wrong kind: {other:?}"),
    }
}

#[test]
fn timer_kinds_differ_only_in_type_code() {
    let custom = CustomTimerRecord::new("T1", &CLOCK);
    let page = PageLoadRecord::new("T1", &CLOCK);

    let custom_line = Record::CustomTimer(custom).to_line().unwrap();
    let page_line = Record::PageLoad(page).to_line().unwrap();

    assert!(custom_line.starts_with("C,"));
    assert!(page_line.starts_with("P,"));
    assert_eq!(&custom_line[1..], &page_line[1..]);
}

#[test]
fn event_record_roundtrips() {
    let mut record = EventRecord::new("CartTimeout", &CLOCK);
    record.test_case_name = "TOrder".to_string();
    record.message = "cart was empty, retrying".to_string();

    let line = Record::Event(record.clone()).to_line().unwrap();
    assert_eq!(
        line,
        "E,CartTimeout,1700000000000,TOrder,\"cart was empty, retrying\""
    );

    match parse(&line).unwrap() {
        Record::Event(parsed) => assert_eq!(parsed, record),
        other => panic!("wrong kind: {other:?}"),
    }
}

#[test]
fn value_kinds_carry_float_samples() {
    let mut record = CustomValueRecord::new("CacheHitRate", &CLOCK);
    record.value = 0.875;
    let line = Record::CustomValue(record.clone()).to_line().unwrap();
    assert_eq!(line, "V,CacheHitRate,1700000000000,0.875");

    match parse(&line).unwrap() {
        Record::CustomValue(parsed) => assert_eq!(parsed, record),
        other => panic!("wrong kind: {other:?}"),
    }

    let mut vital = WebVitalRecord::new("LCP", &CLOCK);
    vital.value = 2481.0;
    let line = Record::WebVital(vital).to_line().unwrap();
    assert!(line.starts_with("W,LCP,"));
}

#[test]
fn request_record_roundtrips_full_schema() {
    let mut record = RequestRecord::new("Login.1", &CLOCK);
    record.timing.run_time = 153;
    record.timing.failed = false;
    record.bytes_sent = 320;
    record.bytes_received = 11420;
    record.response_code = 200;
    record.url = "https://shop.example.com/login".to_string();
    record.content_type = "text/html".to_string();
    record.connect_time = 3;
    record.send_time = 1;
    record.server_busy_time = 87;
    record.receive_time = 40;
    record.time_to_first_bytes = 91;
    record.time_to_last_bytes = 131;
    record.request_id = "hGFcs0lqAs".to_string();
    record.http_method = "POST".to_string();
    record.form_data_encoding = "application/x-www-form-urlencoded".to_string();
    record.form_data = "user=jo&pass=***".to_string();
    record.dns_time = 2;
    record.ip_addresses = vec!["10.0.0.7".to_string(), "10.0.0.8".to_string()];
    record.response_id = "9Zs1xWka".to_string();

    let fields = record.to_fields();
    assert_eq!(fields.len(), 23);
    assert_eq!(fields[21], "10.0.0.7|10.0.0.8");

    let line = Record::Request(record.clone()).to_line().unwrap();
    match parse(&line).unwrap() {
        Record::Request(parsed) => assert_eq!(parsed, record),
        other => panic!("wrong kind: {other:?}"),
    }
}

#[test]
fn request_record_minimum_schema_defaults_the_rest() {
    let record = match parse("R,Login,1700000000000,12,false,1,2,200").unwrap() {
        Record::Request(r) => r,
        other => panic!("wrong kind: {other:?}"),
    };

    assert_eq!(record.header.name, "Login");
    assert_eq!(record.timing.run_time, 12);
    assert_eq!(record.bytes_sent, 1);
    assert_eq!(record.bytes_received, 2);
    assert_eq!(record.response_code, 200);
    assert_eq!(record.url, "");
    assert_eq!(record.content_type, "");
    assert_eq!(record.connect_time, 0);
    assert_eq!(record.request_id, "");
    assert!(record.ip_addresses.is_empty());
}

#[test]
fn request_record_partial_legacy_schema() {
    // ends right after time_to_last_bytes
    let line = "R,Login,1700000000000,12,false,1,2,200,http://e.com,text/html,1,2,3,4,5,6";
    let record = match parse(line).unwrap() {
        Record::Request(r) => r,
        other => panic!("wrong kind: {other:?}"),
    };

    assert_eq!(record.url, "http://e.com");
    assert_eq!(record.content_type, "text/html");
    assert_eq!(record.connect_time, 1);
    assert_eq!(record.time_to_last_bytes, 6);
    assert_eq!(record.request_id, "");
    assert_eq!(record.http_method, "");
    assert_eq!(record.dns_time, 0);
}

#[test]
fn request_record_too_few_fields() {
    assert_eq!(
        parse("R,Login,1700000000000,12,false,1,2"),
        Err(RecordError::TooFewFields {
            expected_min: 8,
            actual: 7
        })
    );
}

#[test]
fn request_record_empty_ip_list_stays_empty() {
    let mut record = RequestRecord::new("Login", &CLOCK);
    record.bytes_sent = 1;
    record.bytes_received = 2;
    record.response_code = 200;

    let line = Record::Request(record).to_line().unwrap();
    let parsed = match parse(&line).unwrap() {
        Record::Request(r) => r,
        other => panic!("wrong kind: {other:?}"),
    };
    assert!(parsed.ip_addresses.is_empty());
}

#[test]
fn transaction_record_roundtrips_with_stack_trace() {
    let mut record = TransactionRecord::new("TOrder", &CLOCK);
    record.timing.run_time = 8000;
    record.timing.failed = true;
    record.stack_trace = Some("boom\nat Foo.bar(Foo.java:12)".to_string());
    record.failed_action_name = "Checkout".to_string();
    record.test_user_number = "7".to_string();
    record.directory_name = "1700000000000".to_string();

    let line = Record::Transaction(record.clone()).to_line().unwrap();
    // line breaks are folded so the record stays on one line
    assert!(!line.contains('\n'));
    assert!(line.contains("boom\\at Foo.bar(Foo.java:12)"));

    match parse(&line).unwrap() {
        Record::Transaction(parsed) => assert_eq!(parsed, record),
        other => panic!("wrong kind: {other:?}"),
    }
}

#[test]
fn transaction_record_empty_trace_decodes_to_none() {
    let record = match parse("T,TOrder,1700000000000,8000,false,").unwrap() {
        Record::Transaction(r) => r,
        other => panic!("wrong kind: {other:?}"),
    };
    assert_eq!(record.stack_trace, None);
    assert_eq!(record.failed_action_name, "");
    assert_eq!(record.test_user_number, "");
    assert_eq!(record.directory_name, "");
}

#[test]
fn transaction_record_reads_older_schemas_by_field_count() {
    // failed action name present, user number and directory absent
    let record = match parse("T,TOrder,1700000000000,8000,true,trace,Checkout").unwrap() {
        Record::Transaction(r) => r,
        other => panic!("wrong kind: {other:?}"),
    };
    assert_eq!(record.failed_action_name, "Checkout");
    assert_eq!(record.test_user_number, "");
    assert_eq!(record.directory_name, "");

    // full current schema
    let record = match parse("T,TOrder,1700000000000,8000,true,trace,Checkout,7,dir1").unwrap() {
        Record::Transaction(r) => r,
        other => panic!("wrong kind: {other:?}"),
    };
    assert_eq!(record.test_user_number, "7");
    assert_eq!(record.directory_name, "dir1");
}

#[test]
fn mismatched_type_code_names_both_codes() {
    let line = "T,TOrder,1700000000000,8000,false,";
    let mut buf = line.as_bytes().to_vec();
    let mut decoder = LineDecoder::new();
    let fields = decoder.decode(&mut buf).unwrap();

    let err = RequestRecord::from_fields(&fields).unwrap_err();
    assert_eq!(
        err,
        RecordError::TypeCodeMismatch {
            expected: 'R',
            actual: "T".to_string()
        }
    );
    assert!(err.to_string().contains('T'));
    assert!(err.to_string().contains('R'));
}

#[test]
fn type_code_is_checked_before_field_count() {
    // a foreign line shorter than this kind's minimum must still report
    // the mismatch, not the width requirement
    let line = "T,TOrder,1700000000000,8000,false,";
    let mut buf = line.as_bytes().to_vec();
    let mut decoder = LineDecoder::new();
    let fields = decoder.decode(&mut buf).unwrap();
    assert!(fields.len() < RequestRecord::MIN_FIELDS);

    assert_eq!(
        RequestRecord::from_fields(&fields),
        Err(RecordError::TypeCodeMismatch {
            expected: 'R',
            actual: "T".to_string()
        })
    );

    let mut buf = b"A,Login,1700000000000".to_vec();
    let fields = decoder.decode(&mut buf).unwrap();
    assert_eq!(
        EventRecord::from_fields(&fields),
        Err(RecordError::TypeCodeMismatch {
            expected: 'E',
            actual: "A".to_string()
        })
    );
}

#[test]
fn invalid_utf8_in_a_string_field_names_its_index() {
    let mut buf = b"E,\xff\xfe,1700000000000,TOrder,msg".to_vec();
    let mut decoder = LineDecoder::new();
    assert_eq!(
        Record::parse_line(&mut buf, &mut decoder),
        Err(RecordError::InvalidUtf8 { index: 1 })
    );
}

#[test]
fn unknown_type_code_is_rejected() {
    assert_eq!(
        parse("X,foo,1700000000000"),
        Err(RecordError::UnknownTypeCode {
            code: "X".to_string()
        })
    );
    assert_eq!(
        parse("ZZ,foo,1700000000000"),
        Err(RecordError::UnknownTypeCode {
            code: "ZZ".to_string()
        })
    );
    assert_eq!(
        parse(""),
        Err(RecordError::UnknownTypeCode {
            code: String::new()
        })
    );
}

#[test]
fn non_positive_timestamps_are_rejected() {
    assert_eq!(
        parse("A,Login,0,42,false"),
        Err(RecordError::InvalidTime { time: 0 })
    );
    assert_eq!(
        parse("A,Login,-5,42,false"),
        Err(RecordError::InvalidTime { time: -5 })
    );
}

#[test]
fn negative_run_time_is_rejected() {
    assert_eq!(
        parse("A,Login,1700000000000,-1,false"),
        Err(RecordError::NegativeRunTime { run_time: -1 })
    );
}

#[test]
fn bad_scalar_fields_name_their_index() {
    assert_eq!(
        parse("A,Login,notatime,42,false"),
        Err(RecordError::InvalidNumber {
            index: 2,
            value: "notatime".to_string()
        })
    );
    assert_eq!(
        parse("A,Login,1700000000000,42,maybe"),
        Err(RecordError::InvalidBool {
            index: 4,
            value: "maybe".to_string()
        })
    );
    assert_eq!(
        parse("V,Rate,1700000000000,fast"),
        Err(RecordError::InvalidNumber {
            index: 3,
            value: "fast".to_string()
        })
    );
}

#[test]
fn malformed_quoting_surfaces_as_csv_error() {
    assert_eq!(
        parse("A,\"Login,1700000000000,42,false"),
        Err(RecordError::Csv(CsvError::UnclosedQuote { pos: 31 }))
    );
}

#[test]
fn record_accessors_dispatch() {
    let record = parse("E,Note,1700000000000,TOrder,hello").unwrap();
    assert_eq!(record.type_code(), TypeCode::Event);
    assert_eq!(record.name(), "Note");
    assert_eq!(record.time(), 1_700_000_000_000);
}

#[test]
fn quoted_name_roundtrips_through_the_record_layer() {
    let mut record = CustomTimerRecord::new("it's a \"test\"", &CLOCK);
    record.timing.run_time = 1;

    let line = Record::CustomTimer(record.clone()).to_line().unwrap();
    assert!(line.starts_with("C,\"it's a \"\"test\"\"\","));

    match parse(&line).unwrap() {
        Record::CustomTimer(parsed) => assert_eq!(parsed, record),
        other => panic!("wrong kind: {other:?}"),
    }
}
