use crate::{
    currency::{format_currency, format_signed_currency},
    labels,
};
use fairsplit_application::EventReport;
use std::fmt::Write as _;

pub struct ReportPresenter;

impl ReportPresenter {
    pub fn render(report: &EventReport, currency: &str) -> String {
        let mut reply = String::new();

        let _ = writeln!(&mut reply, "{}", report.event.name);
        if let Some(description) = &report.event.description {
            let _ = writeln!(&mut reply, "{description}");
        }
        let _ = writeln!(
            &mut reply,
            "{}: {}",
            labels::TOTAL_EXPENSES,
            format_currency(report.summary.total_expense, currency)
        );

        let _ = writeln!(&mut reply, "\n{}", labels::BALANCES);
        if report.balances.is_empty() {
            let _ = writeln!(&mut reply, "  {}", labels::NO_PARTICIPANTS);
        }
        for entry in &report.balances {
            let totals = report
                .summary
                .participants
                .iter()
                .find(|totals| totals.id == entry.id);
            let _ = write!(
                &mut reply,
                "  {}: {}",
                entry.name,
                format_signed_currency(entry.balance, currency)
            );
            if let Some(totals) = totals {
                let _ = write!(
                    &mut reply,
                    " ({} {}, {} {})",
                    labels::PAID,
                    format_currency(totals.paid, currency),
                    labels::SHARE,
                    format_currency(totals.consumed, currency)
                );
            }
            reply.push('\n');
        }

        let _ = writeln!(&mut reply, "\n{}", labels::SETTLEMENTS);
        if report.is_settled() {
            let _ = writeln!(&mut reply, "  {}", labels::ALL_SETTLED);
        }
        for settlement in &report.settlements {
            let _ = writeln!(
                &mut reply,
                "  {} → {}: {}",
                report.display_name(&settlement.from),
                report.display_name(&settlement.to),
                format_currency(settlement.amount, currency)
            );
        }

        reply
    }
}
