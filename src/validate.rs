//! Form Validation Rules
//!
//! Everything a form checks before it is allowed to touch the network.
//! Inputs come in as the raw strings the user typed; outputs are the
//! typed request bodies, or the Persian message to show instead.

use crate::api::orders::{CreateOrderRequest, NewOrderItem, PricedItem, SubmitPricingRequest};
use crate::models::{InvoiceType, Product};

// ========================
// Pricing (admin)
// ========================

/// Editable state of one pricing row
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRowInput {
    pub item_id: u32,
    pub product_name: String,
    pub price: String,
    pub quantity: String,
    pub notes: String,
}

/// A quote needs at least one fully priced row. Rows left completely
/// blank are fine; a row with only one of the two numbers is not.
pub fn validate_pricing(
    rows: &[PricingRowInput],
    comment: &str,
) -> Result<SubmitPricingRequest, String> {
    let mut items = Vec::new();
    for row in rows {
        let price_raw = row.price.trim();
        let quantity_raw = row.quantity.trim();
        match (price_raw.is_empty(), quantity_raw.is_empty()) {
            (true, true) => continue,
            (false, false) => {}
            _ => {
                return Err(format!(
                    "ردیف «{}» ناقص است: قیمت واحد و مقدار نهایی باید با هم وارد شوند.",
                    row.product_name
                ));
            }
        }
        let price: f64 = price_raw.parse().map_err(|_| {
            format!("قیمت واحد «{}» عدد معتبر نیست.", row.product_name)
        })?;
        if price <= 0.0 {
            return Err(format!(
                "قیمت واحد «{}» باید بزرگ‌تر از صفر باشد.",
                row.product_name
            ));
        }
        let quantity: u32 = quantity_raw.parse().map_err(|_| {
            format!("مقدار نهایی «{}» عدد صحیح معتبر نیست.", row.product_name)
        })?;
        if quantity == 0 {
            return Err(format!(
                "مقدار نهایی «{}» باید دست‌کم ۱ باشد.",
                row.product_name
            ));
        }
        let notes = row.notes.trim();
        items.push(PricedItem {
            item_id: row.item_id,
            quoted_unit_price: price,
            final_quantity: quantity,
            admin_notes: (!notes.is_empty()).then(|| notes.to_string()),
        });
    }
    if items.is_empty() {
        return Err(
            "برای ثبت قیمت‌گذاری، دست‌کم یک قلم باید هم قیمت واحد و هم مقدار نهایی داشته باشد."
                .to_string(),
        );
    }
    let comment = comment.trim();
    Ok(SubmitPricingRequest {
        items,
        admin_comment: (!comment.is_empty()).then(|| comment.to_string()),
    })
}

// ========================
// Approval (customer)
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

/// Validated approval submission
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionRequest {
    Approve,
    Reject { reason: String },
}

pub fn validate_decision(
    decision: Option<Decision>,
    reason: &str,
) -> Result<DecisionRequest, String> {
    match decision {
        None => Err("لطفاً تأیید یا رد سفارش را انتخاب کنید.".to_string()),
        Some(Decision::Approve) => Ok(DecisionRequest::Approve),
        Some(Decision::Reject) => {
            let reason = reason.trim();
            if reason.is_empty() {
                Err("برای رد سفارش، نوشتن دلیل الزامی است.".to_string())
            } else {
                Ok(DecisionRequest::Reject {
                    reason: reason.to_string(),
                })
            }
        }
    }
}

// ========================
// Order Draft (customer)
// ========================

/// One picked product with its requested quantity as typed
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub product: Product,
    pub quantity: String,
    pub notes: String,
}

pub fn validate_draft(
    items: &[DraftItem],
    comment: &str,
    invoice_type: InvoiceType,
) -> Result<CreateOrderRequest, String> {
    if items.is_empty() {
        return Err("سفارش باید دست‌کم یک قلم کالا داشته باشد.".to_string());
    }
    let mut out = Vec::new();
    for item in items {
        let quantity: u32 = item.quantity.trim().parse().map_err(|_| {
            format!("تعداد «{}» عدد صحیح معتبر نیست.", item.product.name)
        })?;
        if quantity == 0 {
            return Err(format!(
                "تعداد «{}» باید دست‌کم ۱ باشد.",
                item.product.name
            ));
        }
        let notes = item.notes.trim();
        out.push(NewOrderItem {
            product_id: item.product.id,
            requested_quantity: quantity,
            customer_notes: (!notes.is_empty()).then(|| notes.to_string()),
        });
    }
    let comment = comment.trim();
    Ok(CreateOrderRequest {
        items: out,
        customer_comment: (!comment.is_empty()).then(|| comment.to_string()),
        business_invoice_type: invoice_type,
    })
}

/// Message for an official invoice whose billing profile is incomplete
pub fn official_info_message(missing: &[&str]) -> String {
    format!(
        "برای فاکتور رسمی، این فیلدها را تکمیل کنید: {}",
        missing.join("، ")
    )
}

// ========================
// Accounts
// ========================

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("نام، ایمیل و گذرواژه الزامی است.".to_string());
    }
    if !email.contains('@') {
        return Err("نشانی ایمیل معتبر نیست.".to_string());
    }
    if password.chars().count() < 8 {
        return Err("گذرواژه باید دست‌کم ۸ نویسه باشد.".to_string());
    }
    if password != confirm {
        return Err("تکرار گذرواژه با گذرواژه یکسان نیست.".to_string());
    }
    Ok(())
}

pub fn validate_password_change(
    old_password: &str,
    new_password: &str,
    confirm: &str,
) -> Result<(), String> {
    if old_password.is_empty() || new_password.is_empty() || confirm.is_empty() {
        return Err("همه فیلدها الزامی است.".to_string());
    }
    if new_password.chars().count() < 8 {
        return Err("گذرواژه جدید باید دست‌کم ۸ نویسه باشد.".to_string());
    }
    if new_password != confirm {
        return Err("تکرار گذرواژه با گذرواژه جدید یکسان نیست.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(item_id: u32, price: &str, quantity: &str) -> PricingRowInput {
        PricingRowInput {
            item_id,
            product_name: format!("کالا {item_id}"),
            price: price.to_string(),
            quantity: quantity.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn pricing_needs_at_least_one_complete_row() {
        let rows = vec![make_row(1, "", ""), make_row(2, "", "")];
        let err = validate_pricing(&rows, "").unwrap_err();
        assert!(err.contains("دست‌کم یک قلم"));
    }

    #[test]
    fn half_filled_row_is_an_error_not_skipped() {
        let rows = vec![make_row(1, "120000", ""), make_row(2, "5000", "3")];
        let err = validate_pricing(&rows, "").unwrap_err();
        assert!(err.contains("کالا 1"));
        assert!(err.contains("ناقص"));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let rows = vec![make_row(1, "", ""), make_row(2, "5000", "3")];
        let req = validate_pricing(&rows, "  ").unwrap();
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].item_id, 2);
        assert_eq!(req.items[0].quoted_unit_price, 5000.0);
        assert_eq!(req.items[0].final_quantity, 3);
        assert!(req.admin_comment.is_none());
    }

    #[test]
    fn non_numeric_and_non_positive_values_fail() {
        let rows = vec![make_row(1, "abc", "2")];
        assert!(validate_pricing(&rows, "").unwrap_err().contains("عدد معتبر نیست"));
        let rows = vec![make_row(1, "0", "2")];
        assert!(validate_pricing(&rows, "").unwrap_err().contains("بزرگ‌تر از صفر"));
        let rows = vec![make_row(1, "100", "0")];
        assert!(validate_pricing(&rows, "").unwrap_err().contains("دست‌کم ۱"));
        let rows = vec![make_row(1, "100", "2.5")];
        assert!(validate_pricing(&rows, "").unwrap_err().contains("عدد صحیح"));
    }

    #[test]
    fn pricing_comment_is_trimmed_into_request() {
        let rows = vec![make_row(1, "100", "2")];
        let req = validate_pricing(&rows, " آماده ارسال ").unwrap();
        assert_eq!(req.admin_comment.as_deref(), Some("آماده ارسال"));
    }

    #[test]
    fn decision_must_be_chosen() {
        let err = validate_decision(None, "").unwrap_err();
        assert!(err.contains("انتخاب"));
    }

    #[test]
    fn approve_ignores_reason() {
        assert_eq!(
            validate_decision(Some(Decision::Approve), "متن قدیمی"),
            Ok(DecisionRequest::Approve)
        );
    }

    #[test]
    fn reject_requires_reason() {
        let err = validate_decision(Some(Decision::Reject), "   ").unwrap_err();
        assert!(err.contains("دلیل"));
        assert_eq!(
            validate_decision(Some(Decision::Reject), " قیمت بالاست "),
            Ok(DecisionRequest::Reject {
                reason: "قیمت بالاست".to_string()
            })
        );
    }

    fn make_draft(quantity: &str) -> DraftItem {
        DraftItem {
            product: Product {
                id: 5,
                name: "واشر فلزی".to_string(),
                category: None,
                description: None,
                image_url: None,
                thumbnail_url: None,
                available: true,
            },
            quantity: quantity.to_string(),
            notes: "  بسته‌بندی صادراتی ".to_string(),
        }
    }

    #[test]
    fn empty_draft_is_rejected() {
        let err = validate_draft(&[], "", InvoiceType::Unofficial).unwrap_err();
        assert!(err.contains("دست‌کم یک قلم"));
    }

    #[test]
    fn draft_quantities_must_be_positive_integers() {
        assert!(validate_draft(&[make_draft("0")], "", InvoiceType::Unofficial).is_err());
        assert!(validate_draft(&[make_draft("x")], "", InvoiceType::Unofficial).is_err());
        let req = validate_draft(&[make_draft("12")], "", InvoiceType::Official).unwrap();
        assert_eq!(req.items[0].requested_quantity, 12);
        assert_eq!(req.items[0].customer_notes.as_deref(), Some("بسته‌بندی صادراتی"));
        assert_eq!(req.business_invoice_type, InvoiceType::Official);
    }

    #[test]
    fn official_message_names_missing_fields() {
        let msg = official_info_message(&["کد پستی", "آدرس"]);
        assert!(msg.contains("کد پستی"));
        assert!(msg.contains("آدرس"));
    }

    #[test]
    fn registration_rules() {
        assert!(validate_registration("", "a@b.ir", "12345678", "12345678").is_err());
        assert!(validate_registration("علی", "not-an-email", "12345678", "12345678").is_err());
        assert!(validate_registration("علی", "a@b.ir", "1234567", "1234567").is_err());
        assert!(validate_registration("علی", "a@b.ir", "12345678", "87654321").is_err());
        assert!(validate_registration("علی", "a@b.ir", "12345678", "12345678").is_ok());
    }

    #[test]
    fn password_change_rules() {
        assert!(validate_password_change("", "newpass123", "newpass123").is_err());
        assert!(validate_password_change("old", "short", "short").is_err());
        assert!(validate_password_change("old", "newpass123", "different").is_err());
        assert!(validate_password_change("old", "newpass123", "newpass123").is_ok());
    }
}
