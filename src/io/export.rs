//! Export the generated table to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! model-fitting scripts: one row per period, one column per series, with
//! per-channel columns named `{channel}_spend_raw`, `{channel}_spend`,
//! `{channel}_adstock`, `{channel}_saturated`, `{channel}_sales`.
//!
//! Formatting is a pure `String` function so it can be tested without
//! touching the filesystem.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::GeneratedDataset;
use crate::error::AppError;

/// Render the full dataset as CSV text.
pub fn format_dataset_csv(dataset: &GeneratedDataset) -> String {
    let mut out = String::new();

    out.push_str("date,trend,seasonality,demand,demand_proxy");
    for c in &dataset.channels {
        let name = &c.spec.name;
        out.push_str(&format!(
            ",{name}_spend_raw,{name}_spend,{name}_adstock,{name}_saturated,{name}_sales"
        ));
    }
    out.push_str(",sales\n");

    for t in 0..dataset.len() {
        out.push_str(&format!(
            "{},{:.10},{:.10},{:.10},{:.10}",
            dataset.base.dates[t],
            dataset.base.trend[t],
            dataset.base.seasonality[t],
            dataset.base.demand[t],
            dataset.base.demand_proxy[t],
        ));
        for c in &dataset.channels {
            out.push_str(&format!(
                ",{:.10},{:.10},{:.10},{:.10},{:.10}",
                c.spend_raw[t], c.spend[t], c.adstock[t], c.saturated[t], c.contribution[t],
            ));
        }
        out.push_str(&format!(",{:.10}\n", dataset.sales[t]));
    }

    out
}

/// Write the dataset CSV to a file.
pub fn write_dataset_csv(path: &Path, dataset: &GeneratedDataset) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;
    file.write_all(format_dataset_csv(dataset).as_bytes())
        .map_err(|e| AppError::io(format!("Failed to write export CSV: {e}")))?;
    Ok(())
}
