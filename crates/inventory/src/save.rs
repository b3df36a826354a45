//! Save flow of the new-product form.

use stockroom_validator::form::{AttachedForm, FieldResultSink, FormValidationReport, SubmitOutcome};

use crate::catalog::Inventory;
use crate::error::InventoryResult;
use crate::form::ProductForm;

/// Result of a save attempt that got past parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The product was stored under this SKU and the form was reset.
    Saved(String),
    /// Validation blocked the submit; messages are on the sink.
    Rejected(FormValidationReport),
}

/// Submits the form and, when it validates, stores the product and resets
/// the form.
///
/// Parse or storage failures leave the form untouched so the user can fix
/// the input.
pub fn save_product<S>(
    attached: &mut AttachedForm<ProductForm, S>,
    inventory: &mut Inventory,
) -> InventoryResult<SaveOutcome>
where
    S: FieldResultSink,
{
    if let SubmitOutcome::Blocked(report) = attached.submit() {
        tracing::debug!(invalid = report.invalid().count(), "save rejected by validation");
        return Ok(SaveOutcome::Rejected(report));
    }

    let product = attached.form().into_product()?;
    let sku = inventory.add(product)?.sku.clone();
    attached.reset();

    tracing::debug!(sku = %sku, total = inventory.len(), "product saved");
    Ok(SaveOutcome::Saved(sku))
}
