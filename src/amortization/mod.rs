//! Amortization engine: monthly payment and per-period schedules

mod annuity;
mod engine;
mod schedule;
mod state;

pub use annuity::{annuity_factor, compute_monthly_payment, max_principal_for_payment};
pub use engine::{AmortizationEngine, FinalPeriodPolicy, ScheduleConfig};
pub use schedule::{AmortizationSchedule, Payment, ScheduleSummary};
pub use state::{PaymentIter, ScheduleState};
