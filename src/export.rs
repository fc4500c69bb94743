//! Schedule consumers: CSV export, JSON export and a fixed-width text table

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::amortization::{AmortizationSchedule, Payment};
use crate::error::Result;

/// Receives a finished schedule (table renderer, exporter, ...)
pub trait ScheduleConsumer {
    fn consume(&mut self, monthly_payment: f64, payments: &[Payment]) -> Result<()>;
}

#[derive(Serialize)]
struct CsvRow {
    #[serde(rename = "Payment")]
    payment_number: u32,
    #[serde(rename = "Date")]
    payment_date: String,
    #[serde(rename = "Amount")]
    payment_amount: String,
    #[serde(rename = "Principal")]
    principal_paid: String,
    #[serde(rename = "Interest")]
    interest_paid: String,
    #[serde(rename = "Balance")]
    remaining_balance: String,
}

impl From<&Payment> for CsvRow {
    fn from(p: &Payment) -> Self {
        CsvRow {
            payment_number: p.payment_number,
            payment_date: p.payment_date.format("%Y-%m-%d").to_string(),
            payment_amount: format!("{:.2}", p.payment_amount),
            principal_paid: format!("{:.2}", p.principal_paid),
            interest_paid: format!("{:.2}", p.interest_paid),
            remaining_balance: format!("{:.2}", p.remaining_balance),
        }
    }
}

/// Writes one CSV row per payment, amounts rounded to cents
pub struct CsvScheduleWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvScheduleWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> CsvScheduleWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::error::MortgageError::Io(e.into_error()))
    }
}

impl<W: Write> ScheduleConsumer for CsvScheduleWriter<W> {
    fn consume(&mut self, _monthly_payment: f64, payments: &[Payment]) -> Result<()> {
        for payment in payments {
            self.writer.serialize(CsvRow::from(payment))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Fixed-width text table, optionally cut after `max_rows`
#[derive(Debug, Clone, Default)]
pub struct ScheduleTable {
    max_rows: Option<usize>,
    rendered: String,
}

impl ScheduleTable {
    pub fn new(max_rows: Option<usize>) -> Self {
        Self {
            max_rows,
            rendered: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl ScheduleConsumer for ScheduleTable {
    fn consume(&mut self, monthly_payment: f64, payments: &[Payment]) -> Result<()> {
        use std::fmt::Write as _;

        let shown = self.max_rows.unwrap_or(payments.len()).min(payments.len());
        let out = &mut self.rendered;
        out.clear();

        let _ = writeln!(out, "Monthly payment: {}", format_money(monthly_payment));
        let _ = writeln!(
            out,
            "{:>5} {:>10} {:>14} {:>14} {:>14} {:>16}",
            "No.", "Date", "Payment", "Principal", "Interest", "Balance"
        );
        let _ = writeln!(out, "{}", "-".repeat(78));
        for p in &payments[..shown] {
            let _ = writeln!(
                out,
                "{:>5} {:>10} {:>14} {:>14} {:>14} {:>16}",
                p.payment_number,
                p.payment_date.format("%Y-%m-%d"),
                format_money(p.payment_amount),
                format_money(p.principal_paid),
                format_money(p.interest_paid),
                format_money(p.remaining_balance),
            );
        }
        if payments.len() > shown {
            let _ = writeln!(out, "... ({} more payments)", payments.len() - shown);
        }
        Ok(())
    }
}

/// Feed a schedule to any consumer
pub fn export_schedule<C: ScheduleConsumer>(schedule: &AmortizationSchedule, consumer: &mut C) -> Result<()> {
    consumer.consume(schedule.monthly_payment, &schedule.payments)
}

/// Pretty-printed JSON of the whole schedule
pub fn write_schedule_json<W: Write>(writer: W, schedule: &AmortizationSchedule) -> Result<()> {
    serde_json::to_writer_pretty(writer, schedule)?;
    Ok(())
}

/// Dollar amount with thousands separators and two decimals, e.g. `$5,280.10`
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
