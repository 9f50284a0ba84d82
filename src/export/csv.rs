use crate::error::ExportError;
use crate::model::Inventory;
use crate::plan::PaymentPlanItem;
use std::fs::File;
use std::path::Path;

/// Export the full unit list, one row per unit, with the firm claim (if
/// any) resolved per row.
pub fn export_units_csv<P: AsRef<Path>>(
    inventory: &Inventory,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "Phase",
        "Section",
        "Block",
        "Unit",
        "Gross m2",
        "Net m2",
        "Total m2",
        "Status",
        "Firm",
    ])?;

    for phase in &inventory.phases {
        for block in &phase.blocks {
            for unit in &block.units {
                let firm = inventory
                    .firm_for_unit(&block.name, &unit.unit_number, Some(phase.phase))
                    .map_or_else(String::new, |f| f.name.clone());

                writer.write_record(&[
                    phase.phase.label().to_string(),
                    unit.section.clone(),
                    block.name.clone(),
                    unit.unit_number.clone(),
                    format!("{:.2}", unit.gross_area),
                    format!("{:.2}", unit.net_area),
                    format!("{:.2}", unit.total_area()),
                    unit.status.as_str().to_string(),
                    firm,
                ])?;
            }
        }
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

/// Export one payment schedule as a downloadable CSV table.
pub fn export_plan_csv<P: AsRef<Path>>(
    items: &[PaymentPlanItem],
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["No", "Date", "Amount TL", "Description"])?;

    for item in items {
        writer.write_record(&[
            item.installment_no.to_string(),
            item.date.to_string(),
            format!("{:.0}", item.amount),
            item.description.clone(),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
