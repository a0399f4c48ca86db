//! Field-by-field encoding of one employee record.
//!
//! All integers are big-endian. Text fields carry a `u16` byte length
//! followed by UTF-8 bytes. Character codes are stored as 16-bit code units.
//!
//! ```text
//! name          u16 len + UTF-8
//! sex           u16 char code
//! base_salary   timestamp: u16 len + decimal text | calendar: f32
//! hire_date     timestamp: i64 epoch millis       | calendar: i16 year, i8 month, i8 day
//! contract_type u16 char code
//! province      u8 code
//! ```

use std::io::{ErrorKind, Read, Write};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use super::RecordLayout;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{ContractType, Employee, Province, Sex, hire_date_from_parts};

/// Offset added to a stored timestamp before taking its UTC date.
///
/// Local midnight in zones from UTC-11 to UTC+12 lands on the intended day.
/// Midnight in UTC+13 or UTC+14 falls before 12:00 UTC of the previous day
/// and decodes one day early.
const HALF_DAY_MILLIS: i64 = 12 * 60 * 60 * 1000;

/// Encodes `employee` into the bytes of one record.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidEmployee`] if a field cannot be
/// represented in `layout`.
pub fn encode_record(employee: &Employee, layout: RecordLayout) -> PayrollResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(64);

    put_text(&mut buf, "name", employee.name())?;
    put_char(&mut buf, employee.sex().code());

    match layout {
        RecordLayout::Timestamp => {
            put_text(&mut buf, "base_salary", &employee.base_salary().to_string())?;
            let millis = employee
                .hire_date()
                .and_time(NaiveTime::MIN)
                .and_utc()
                .timestamp_millis();
            buf.extend_from_slice(&millis.to_be_bytes());
        }
        RecordLayout::Calendar => {
            let salary = employee.base_salary().to_f32().ok_or_else(|| {
                PayrollError::invalid_employee("base_salary", "not representable as f32")
            })?;
            buf.extend_from_slice(&salary.to_be_bytes());

            let date = employee.hire_date();
            let year = i16::try_from(date.year()).map_err(|_| {
                PayrollError::invalid_employee("hire_date", "year does not fit in 16 bits")
            })?;
            buf.extend_from_slice(&year.to_be_bytes());
            // month and day always fit in a signed byte
            buf.push(date.month() as u8);
            buf.push(date.day() as u8);
        }
    }

    put_char(&mut buf, employee.contract_type().code());
    buf.push(employee.province().code());

    Ok(buf)
}

/// Writes one record for `employee` to `writer`.
///
/// The record is encoded in full before anything is written, so a failed
/// encode leaves `writer` untouched.
pub fn encode_employee<W: Write>(
    writer: &mut W,
    employee: &Employee,
    layout: RecordLayout,
) -> PayrollResult<()> {
    let record = encode_record(employee, layout)?;
    writer.write_all(&record)?;
    Ok(())
}

/// Reads the next record from `reader`.
///
/// Returns `Ok(None)` when the stream ends exactly at a record boundary.
///
/// Timestamp-layout hire dates written at local midnight are read back as
/// the intended day for writers in UTC-11 to UTC+12. Further east the date
/// comes out one day early.
///
/// # Errors
///
/// - [`PayrollError::CorruptRecord`] when the stream ends inside a record or
///   a field cannot be decoded into a valid employee
/// - [`PayrollError::UnknownCode`] when an enumeration code is not recognised
/// - [`PayrollError::Io`] for any other read failure
pub fn decode_employee<R: Read>(
    reader: &mut R,
    layout: RecordLayout,
) -> PayrollResult<Option<Employee>> {
    let Some(first) = read_first_byte(reader)? else {
        return Ok(None);
    };

    let mut fields = FieldReader { inner: reader };

    let [second] = fields.bytes::<1>("name")?;
    let name = fields.text_of_len("name", u16::from_be_bytes([first, second]))?;
    let sex = Sex::from_code(fields.char_code("sex")?)?;

    let (base_salary, hire_date) = match layout {
        RecordLayout::Timestamp => {
            let text = fields.text("base_salary")?;
            let salary = Decimal::from_str(&text).map_err(|e| {
                PayrollError::corrupt(format!("base salary '{text}' is not a decimal: {e}"))
            })?;

            let millis = i64::from_be_bytes(fields.bytes::<8>("hire_date")?);
            // tolerate writers that stored local rather than UTC midnight
            let date = millis
                .checked_add(HALF_DAY_MILLIS)
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| {
                    PayrollError::corrupt(format!("hire timestamp {millis} is out of range"))
                })?;
            (salary, date)
        }
        RecordLayout::Calendar => {
            let raw = f32::from_be_bytes(fields.bytes::<4>("base_salary")?);
            let salary = Decimal::from_f64(f64::from(raw))
                .map(|d| d.round_dp(2))
                .ok_or_else(|| PayrollError::corrupt(format!("base salary {raw} is not finite")))?;

            let year = i16::from_be_bytes(fields.bytes::<2>("hire_date")?);
            let [month] = fields.bytes::<1>("hire_date")?;
            let [day] = fields.bytes::<1>("hire_date")?;
            let date = hire_date_from_parts(i32::from(year), u32::from(month), u32::from(day))
                .map_err(|e| PayrollError::corrupt(format!("stored hire date rejected: {e}")))?;
            (salary, date)
        }
    };

    let contract_type = ContractType::from_code(fields.char_code("contract_type")?)?;
    let [province_code] = fields.bytes::<1>("province")?;
    let province = Province::from_code(province_code)?;

    Employee::new(
        &name,
        sex,
        base_salary,
        hire_date,
        contract_type,
        province,
    )
    .map(Some)
    .map_err(|e| PayrollError::corrupt(format!("stored employee rejected: {e}")))
}

fn put_text(buf: &mut Vec<u8>, field: &'static str, text: &str) -> PayrollResult<()> {
    let len = u16::try_from(text.len()).map_err(|_| {
        PayrollError::invalid_employee(field, format!("{} bytes is too long to store", text.len()))
    })?;
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(text.as_bytes());
    Ok(())
}

fn put_char(buf: &mut Vec<u8>, code: char) {
    // enumeration codes are ASCII, so one UTF-16 unit always suffices
    let mut units = [0u16; 2];
    let encoded = code.encode_utf16(&mut units);
    buf.extend_from_slice(&encoded[0].to_be_bytes());
}

fn read_first_byte<R: Read>(reader: &mut R) -> PayrollResult<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Reads fields after the first byte of a record, where end of stream
/// always means truncation.
struct FieldReader<'a, R> {
    inner: &'a mut R,
}

impl<R: Read> FieldReader<'_, R> {
    fn bytes<const N: usize>(&mut self, field: &'static str) -> PayrollResult<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(field, &mut buf)?;
        Ok(buf)
    }

    fn fill(&mut self, field: &'static str, buf: &mut [u8]) -> PayrollResult<()> {
        self.inner.read_exact(buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                PayrollError::corrupt(format!("record ends inside field '{field}'"))
            } else {
                PayrollError::Io(e)
            }
        })
    }

    fn text(&mut self, field: &'static str) -> PayrollResult<String> {
        let len = u16::from_be_bytes(self.bytes::<2>(field)?);
        self.text_of_len(field, len)
    }

    fn text_of_len(&mut self, field: &'static str, len: u16) -> PayrollResult<String> {
        let mut buf = vec![0u8; usize::from(len)];
        self.fill(field, &mut buf)?;
        String::from_utf8(buf).map_err(|_| {
            PayrollError::corrupt(format!("field '{field}' is not valid UTF-8"))
        })
    }

    fn char_code(&mut self, field: &'static str) -> PayrollResult<char> {
        let unit = u16::from_be_bytes(self.bytes::<2>(field)?);
        char::from_u32(u32::from(unit)).ok_or_else(|| {
            PayrollError::corrupt(format!("field '{field}' holds a lone surrogate {unit:#06x}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee::new(
            "José Gómez",
            Sex::Male,
            dec("1234.56"),
            NaiveDate::from_ymd_opt(2009, 7, 15).unwrap(),
            ContractType::Commission,
            Province::Malaga,
        )
        .unwrap()
    }

    fn decode_all(bytes: &[u8], layout: RecordLayout) -> PayrollResult<Vec<Employee>> {
        let mut cursor = Cursor::new(bytes);
        let mut out = Vec::new();
        while let Some(employee) = decode_employee(&mut cursor, layout)? {
            out.push(employee);
        }
        Ok(out)
    }

    #[test]
    fn test_timestamp_layout_bytes() {
        let bytes = encode_record(&create_test_employee(), RecordLayout::Timestamp).unwrap();

        // "José Gómez" is 12 UTF-8 bytes
        assert_eq!(&bytes[0..2], &[0, 12]);
        assert_eq!(&bytes[2..14], "José Gómez".as_bytes());
        assert_eq!(&bytes[14..16], &[0, b'H']);
        assert_eq!(&bytes[16..18], &[0, 7]);
        assert_eq!(&bytes[18..25], b"1234.56");
        let millis = i64::from_be_bytes(bytes[25..33].try_into().unwrap());
        assert_eq!(millis, 1_247_616_000_000);
        assert_eq!(&bytes[33..35], &[0, b'C']);
        assert_eq!(bytes[35], 7);
        assert_eq!(bytes.len(), 36);
    }

    #[test]
    fn test_calendar_layout_bytes() {
        let bytes = encode_record(&create_test_employee(), RecordLayout::Calendar).unwrap();

        assert_eq!(&bytes[14..16], &[0, b'H']);
        let salary = f32::from_be_bytes(bytes[16..20].try_into().unwrap());
        assert_eq!(salary, 1234.56_f32);
        assert_eq!(&bytes[20..22], &2009_i16.to_be_bytes());
        assert_eq!(bytes[22], 7);
        assert_eq!(bytes[23], 15);
        assert_eq!(&bytes[24..26], &[0, b'C']);
        assert_eq!(bytes[26], 7);
        assert_eq!(bytes.len(), 27);
    }

    #[test]
    fn test_round_trip_timestamp_layout() {
        let employee = create_test_employee();
        let mut buf = Vec::new();
        encode_employee(&mut buf, &employee, RecordLayout::Timestamp).unwrap();

        let decoded = decode_employee(&mut Cursor::new(buf), RecordLayout::Timestamp)
            .unwrap()
            .unwrap();
        assert_eq!(decoded, employee);
    }

    #[test]
    fn test_round_trip_calendar_layout() {
        let employee = create_test_employee();
        let mut buf = Vec::new();
        encode_employee(&mut buf, &employee, RecordLayout::Calendar).unwrap();

        let decoded = decode_employee(&mut Cursor::new(buf), RecordLayout::Calendar)
            .unwrap()
            .unwrap();
        assert_eq!(decoded, employee);
        assert_eq!(decoded.base_salary(), dec("1234.56"));
    }

    #[test]
    fn test_empty_stream_is_end_of_records() {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        assert!(
            decode_employee(&mut cursor, RecordLayout::Timestamp)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_sequential_records_then_end() {
        let first = create_test_employee();
        let second = Employee::new(
            "Rocío",
            Sex::Female,
            dec("99999.99"),
            NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
            ContractType::HomeBased,
            Province::Almeria,
        )
        .unwrap();

        for layout in [RecordLayout::Timestamp, RecordLayout::Calendar] {
            let mut buf = Vec::new();
            encode_employee(&mut buf, &first, layout).unwrap();
            encode_employee(&mut buf, &second, layout).unwrap();

            let decoded = decode_all(&buf, layout).unwrap();
            assert_eq!(decoded, vec![first.clone(), second.clone()], "{layout}");
        }
    }

    #[test]
    fn test_truncated_record_is_corruption_not_end() {
        let bytes = encode_record(&create_test_employee(), RecordLayout::Timestamp).unwrap();

        for cut in 1..bytes.len() {
            let err = decode_all(&bytes[..cut], RecordLayout::Timestamp).unwrap_err();
            assert!(
                matches!(err, PayrollError::CorruptRecord { .. }),
                "cut at {cut}: {err:?}"
            );
        }
    }

    #[test]
    fn test_truncation_names_the_field() {
        let bytes = encode_record(&create_test_employee(), RecordLayout::Calendar).unwrap();
        let err = decode_all(&bytes[..15], RecordLayout::Calendar).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Corrupt record: record ends inside field 'sex'"
        );
    }

    #[test]
    fn test_unknown_province_code_fails_loudly() {
        let mut bytes = encode_record(&create_test_employee(), RecordLayout::Timestamp).unwrap();
        let last = bytes.len() - 1;
        bytes[last] = 9;

        let err = decode_all(&bytes, RecordLayout::Timestamp).unwrap_err();
        assert!(matches!(
            err,
            PayrollError::UnknownCode { kind: "province", .. }
        ));
    }

    #[test]
    fn test_unknown_sex_code_fails_loudly() {
        let mut bytes = encode_record(&create_test_employee(), RecordLayout::Timestamp).unwrap();
        bytes[15] = b'X';

        let err = decode_all(&bytes, RecordLayout::Timestamp).unwrap_err();
        assert!(matches!(err, PayrollError::UnknownCode { kind: "sex", .. }));
    }

    #[test]
    fn test_out_of_range_stored_salary_is_corruption() {
        let mut bytes = encode_record(&create_test_employee(), RecordLayout::Calendar).unwrap();
        bytes[16..20].copy_from_slice(&(-5.0_f32).to_be_bytes());

        let err = decode_all(&bytes, RecordLayout::Calendar).unwrap_err();
        assert!(matches!(err, PayrollError::CorruptRecord { .. }));
    }

    #[test]
    fn test_impossible_stored_date_is_corruption() {
        let mut bytes = encode_record(&create_test_employee(), RecordLayout::Calendar).unwrap();
        bytes[22] = 2;
        bytes[23] = 30;

        let err = decode_all(&bytes, RecordLayout::Calendar).unwrap_err();
        assert!(matches!(err, PayrollError::CorruptRecord { .. }));
    }

    #[test]
    fn test_local_midnight_timestamp_decodes_to_same_day() {
        let employee = create_test_employee();
        let mut bytes = encode_record(&employee, RecordLayout::Timestamp).unwrap();
        // midnight in UTC+2 is 22:00 UTC the previous day
        let shifted = 1_247_616_000_000_i64 - 2 * 60 * 60 * 1000;
        bytes[25..33].copy_from_slice(&shifted.to_be_bytes());

        let decoded = decode_all(&bytes, RecordLayout::Timestamp).unwrap();
        assert_eq!(decoded[0].hire_date(), employee.hire_date());
    }

    #[test]
    fn test_local_midnight_window_edges() {
        let employee = create_test_employee();
        let utc_midnight = 1_247_616_000_000_i64;
        let hour = 60 * 60 * 1000;

        // UTC+12 and UTC-11 are the outermost zones that still decode to the same day
        for offset_hours in [12, -11] {
            let mut bytes = encode_record(&employee, RecordLayout::Timestamp).unwrap();
            let stored = utc_midnight - offset_hours * hour;
            bytes[25..33].copy_from_slice(&stored.to_be_bytes());

            let decoded = decode_all(&bytes, RecordLayout::Timestamp).unwrap();
            assert_eq!(decoded[0].hire_date(), employee.hire_date(), "UTC{offset_hours:+}");
        }

        let mut bytes = encode_record(&employee, RecordLayout::Timestamp).unwrap();
        let stored = utc_midnight - 13 * hour;
        bytes[25..33].copy_from_slice(&stored.to_be_bytes());
        let decoded = decode_all(&bytes, RecordLayout::Timestamp).unwrap();
        assert_eq!(decoded[0].hire_date(), employee.hire_date().pred_opt().unwrap());
    }

    #[test]
    fn test_layouts_are_not_interchangeable() {
        let bytes = encode_record(&create_test_employee(), RecordLayout::Timestamp).unwrap();
        assert!(decode_all(&bytes, RecordLayout::Calendar).is_err());
    }

    fn arb_employee() -> impl Strategy<Value = Employee> {
        (
            "[A-Za-zÁÉÍÓÚáéíóúÑñ ]{1,30}",
            prop::sample::select(Sex::ALL.to_vec()),
            0i64..=9_999_999,
            (1900i32..=2100, 1u32..=12, 1u32..=28),
            prop::sample::select(ContractType::ALL.to_vec()),
            prop::sample::select(Province::ALL.to_vec()),
        )
            .prop_filter_map(
                "name must not be blank",
                |(name, sex, cents, (y, m, d), contract, province)| {
                    Employee::new(
                        &name,
                        sex,
                        Decimal::new(cents, 2),
                        NaiveDate::from_ymd_opt(y, m, d)?,
                        contract,
                        province,
                    )
                    .ok()
                },
            )
    }

    proptest! {
        #[test]
        fn timestamp_layout_round_trips(employee in arb_employee()) {
            let bytes = encode_record(&employee, RecordLayout::Timestamp).unwrap();
            let decoded = decode_employee(&mut Cursor::new(bytes), RecordLayout::Timestamp).unwrap();
            prop_assert_eq!(decoded, Some(employee));
        }

        #[test]
        fn calendar_layout_round_trips(employee in arb_employee()) {
            let bytes = encode_record(&employee, RecordLayout::Calendar).unwrap();
            let decoded = decode_employee(&mut Cursor::new(bytes), RecordLayout::Calendar).unwrap();
            prop_assert_eq!(decoded, Some(employee));
        }
    }
}
