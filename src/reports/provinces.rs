//! Employee counts per province.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::info;

use super::NO_EMPLOYEES;
use crate::error::PayrollResult;
use crate::models::{Employee, Province};

/// Number of employees posted to each province.
///
/// Provinces without employees are absent. Iteration follows province code
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvinceCounts {
    counts: BTreeMap<Province, usize>,
}

impl ProvinceCounts {
    /// Counts one more employee in `province`.
    pub fn record(&mut self, province: Province) {
        *self.counts.entry(province).or_default() += 1;
    }

    /// Returns the count for `province`, zero when none were seen.
    pub fn count(&self, province: Province) -> usize {
        self.counts.get(&province).copied().unwrap_or(0)
    }

    /// Returns the number of employees counted across all provinces.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns true when no employee was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(province, count)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (Province, usize)> + '_ {
        self.counts.iter().map(|(p, c)| (*p, *c))
    }

    /// Returns every province sharing the highest count, in code order.
    pub fn most_populous(&self) -> Vec<(Province, usize)> {
        let Some(max) = self.counts.values().copied().max() else {
            return Vec::new();
        };
        self.iter().filter(|(_, count)| *count == max).collect()
    }
}

/// Counts employees per province.
///
/// # Errors
///
/// Returns the first read error.
pub fn count_by_province<I>(records: I) -> PayrollResult<ProvinceCounts>
where
    I: IntoIterator<Item = PayrollResult<Employee>>,
{
    let mut counts = ProvinceCounts::default();
    for record in records {
        counts.record(record?.province());
    }

    info!(
        total = counts.total(),
        provinces = counts.counts.len(),
        "Province count complete"
    );
    Ok(counts)
}

/// Writes the province(s) with the most employees.
pub fn render_most_populous<W: Write>(out: &mut W, counts: &ProvinceCounts) -> PayrollResult<()> {
    if counts.is_empty() {
        writeln!(out, "{NO_EMPLOYEES}")?;
        return Ok(());
    }

    writeln!(out, "Province(s) with the most employees:")?;
    for (province, count) in counts.most_populous() {
        writeln!(out, " - {province} ({count})")?;
    }
    Ok(())
}

/// Writes the count of every province, including those with no employees.
pub fn render_all_counts<W: Write>(out: &mut W, counts: &ProvinceCounts) -> PayrollResult<()> {
    for province in Province::ALL {
        writeln!(out, "{:<10} {:>5}", province.label(), counts.count(province))?;
    }
    writeln!(out, "{:<10} {:>5}", "Total", counts.total())?;
    Ok(())
}
