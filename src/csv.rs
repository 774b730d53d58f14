// src/csv.rs
use std::io::{self, Write};

use serde_json::{ Number, Value };

use crate::config::options::CsvLayout;
use crate::schools::SchoolDirectory;
use crate::session::{ form::date_or_tbd, DerivedView, SessionForm };

/// One exported label/value pair.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryField {
    pub label: &'static str,
    pub value: Value,
}

pub const SUMMARY_LABELS: [&str; 14] = [
    "GPA",
    "College Classes",
    "Residency",
    "FAFSA Eligible",
    "Credits Taken",
    "Desired Level",
    "Down Payment",
    "FAFSA Reduction",
    "Work Reduction (Total)",
    "Net Remaining Balance",
    "Pathway Length",
    "Visit Date #1",
    "Visit Date #2",
    "Selected Schools",
];

pub const SCHOOL_JOIN: &str = "; ";

/* ---------------- Building ---------------- */

/// Integral amounts serialize without a fractional part (`31750`, not `31750.0`).
pub fn json_number(v: f64) -> Value {
    if !v.is_finite() {
        return Value::from(0);
    }
    if v.fract() == 0.0 && v.abs() < 9.007_199_254_740_992e15 {
        Value::from(v as i64)
    } else {
        Number::from_f64(v).map(Value::Number).unwrap_or_else(|| Value::from(0))
    }
}

/// Summary in export order. Text fields are JSON strings, amounts are JSON numbers.
pub fn summary_fields(
    form: &SessionForm,
    derived: &DerivedView,
    directory: &SchoolDirectory,
) -> Vec<SummaryField> {
    let fin = &derived.financials;
    let schools = directory
        .resolve(&form.schools)
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(SCHOOL_JOIN);

    let values = [
        Value::from(form.profile.gpa.as_str()),
        Value::from(form.profile.college_classes.as_str()),
        Value::from(form.residency.code()),
        Value::from(if derived.fafsa_eligible { "Yes" } else { "No" }),
        Value::from(form.credits_taken),
        Value::from(form.desired_level.map(|l| l.label()).unwrap_or("")),
        json_number(form.financial.down_payment),
        json_number(fin.fafsa_reduction),
        json_number(fin.work_reduction_total),
        json_number(fin.net_remaining_balance),
        Value::from(form.financial.plan_length.semesters().to_string()),
        Value::from(date_or_tbd(form.visits.first)),
        Value::from(date_or_tbd(form.visits.second)),
        Value::from(schools),
    ];

    SUMMARY_LABELS
        .into_iter()
        .zip(values)
        .map(|(label, value)| SummaryField { label, value })
        .collect()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row of plain cells, quoting only where needed. No line terminator.
pub fn write_row<W: Write>(mut w: W, row: &[&str], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    Ok(())
}

/// Write a row where every cell is JSON-encoded (strings quoted + escaped). No line terminator.
pub fn write_json_row<W: Write>(mut w: W, row: &[&Value], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        serde_json::to_writer(&mut w, cell)?;
    }
    Ok(())
}

/// Lines are joined with `\n`, no trailing newline.
pub fn to_csv_string(fields: &[SummaryField], layout: CsvLayout) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();

    match layout {
        CsvLayout::Wide => {
            let labels: Vec<&str> = fields.iter().map(|f| f.label).collect();
            let values: Vec<&Value> = fields.iter().map(|f| &f.value).collect();
            write_row(&mut buf, &labels, ',')?;
            buf.push(b'\n');
            write_json_row(&mut buf, &values, ',')?;
        }
        CsvLayout::KeyValue => {
            write_row(&mut buf, &["Field", "Value"], ',')?;
            for f in fields {
                let label = Value::from(f.label);
                buf.push(b'\n');
                write_json_row(&mut buf, &[&label, &f.value], ',')?;
            }
        }
    }

    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_number_drops_integral_fraction() {
        assert_eq!(json_number(31_750.0).to_string(), "31750");
        assert_eq!(json_number(1250.5).to_string(), "1250.5");
        assert_eq!(json_number(f64::NAN).to_string(), "0");
    }

    #[test]
    fn plain_cells_quote_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b,c", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\"");
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[test]
    fn writer_errors_are_propagated() {
        assert!(write_row(Full, &["GPA"], ',').is_err());
        assert!(write_json_row(Full, &[&Value::from(3.5)], ',').is_err());
    }
}
