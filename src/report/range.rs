use chrono::NaiveDate;

use super::ReportError;

/// Expand an inclusive date range into the ordered sequence of every
/// calendar day from `from` to `to`, advancing one day at a time.
///
/// Month/year rollover and leap years come from chrono's calendar
/// arithmetic. `from == to` yields a single-element sequence.
pub fn expand_range(from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>, ReportError> {
    if from > to {
        return Err(ReportError::InvalidRange { from, to });
    }

    let days = (to - from).num_days() as usize + 1;
    let mut dates = Vec::with_capacity(days);
    let mut current = from;
    while current <= to {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            // End of chrono's representable range; nothing further to emit
            None => break,
        }
    }
    Ok(dates)
}
