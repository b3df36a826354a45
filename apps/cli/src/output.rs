//! Rendering reports and products for the terminal.

use std::fmt::Write as _;

use stockroom_inventory::Product;
use stockroom_validator::form::FormValidationReport;

/// One line per field, then a summary line.
pub fn report_text(report: &FormValidationReport) -> String {
    let mut out = String::new();
    for result in report.results() {
        match result.message() {
            None => {
                let _ = writeln!(out, "ok    {}", result.field_id());
            }
            Some(message) => {
                let _ = writeln!(out, "FAIL  {}: {message}", result.field_id());
            }
        }
    }

    let invalid = report.invalid().count();
    if report.is_valid() {
        let _ = writeln!(out, "form is valid ({} fields)", report.len());
    } else {
        let _ = writeln!(out, "form is invalid ({invalid} of {} fields)", report.len());
    }
    out
}

pub fn product_row(product: &Product) -> String {
    format!(
        "{:<14} {:<28} {:<12} {:>10} {:>6}  {}",
        product.sku,
        product.name,
        product.category.map_or("-", |c| c.as_str()),
        product.price.to_string(),
        product.stock,
        product.status.label(),
    )
}

pub fn product_header() -> String {
    format!(
        "{:<14} {:<28} {:<12} {:>10} {:>6}  {}",
        "SKU", "NAME", "CATEGORY", "PRICE", "STOCK", "STATUS"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_validator::field::FieldDescriptor;
    use stockroom_validator::form::{NoopSink, validate_form};

    #[test]
    fn test_report_text() {
        let fields = [
            FieldDescriptor::builder("sku", "SKU").required(true).value("ABC-123-000").build(),
            FieldDescriptor::builder("price", "Price").required(true).build(),
        ];
        let report = validate_form(&fields, &mut NoopSink);
        assert_eq!(
            report_text(&report),
            "ok    sku\nFAIL  price: Price is required.\nform is invalid (1 of 2 fields)\n"
        );
    }
}
