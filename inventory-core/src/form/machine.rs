use std::collections::BTreeMap;
use std::future::Future;

use super::values::{Entry, FormField, FormValues};
use crate::models::{Product, ProductPayload};

/// Field-level errors, one message per failing field.
pub type FieldErrors = BTreeMap<FormField, &'static str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Just opened with defaults or the edit target's values.
    Pristine,
    Editing,
    Validating,
    /// Payload handed to the save handler, waiting for it to finish.
    Submitting,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    Ready(ProductPayload),
    Invalid(FieldErrors),
    /// A previous submission is still outstanding.
    Busy,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Busy,
    Saved,
    Failed,
}

/// Checks every field and reports all failures at once.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if values.sku.trim().is_empty() {
        errors.insert(FormField::Sku, "SKU requerido");
    }
    if values.name.trim().is_empty() {
        errors.insert(FormField::Name, "Nombre requerido");
    }
    if values.category_code.is_empty() {
        errors.insert(FormField::CategoryCode, "Selecciona categoría");
    }
    if values.unit_code.is_empty() {
        errors.insert(FormField::UnitCode, "Selecciona unidad");
    }
    if values.status_code.is_empty() {
        errors.insert(FormField::StatusCode, "Selecciona estado");
    }
    if !matches!(values.quantity, Entry::Value(quantity) if quantity >= 0) {
        errors.insert(FormField::Quantity, "Cantidad inválida");
    }
    if !matches!(values.price, Entry::Value(price) if price >= 0.0) {
        errors.insert(FormField::Price, "Precio inválido");
    }

    errors
}

/// Editable state of the product modal.
#[derive(Debug, Clone)]
pub struct ProductForm {
    values: FormValues,
    errors: FieldErrors,
    phase: FormPhase,
}

impl ProductForm {
    pub fn create() -> Self {
        Self::from_values(FormValues::default())
    }

    pub fn edit(product: &Product) -> Self {
        Self::from_values(FormValues::from_product(product))
    }

    pub fn from_values(values: FormValues) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            phase: FormPhase::Pristine,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_edit(&self) -> bool {
        self.values.id.is_some()
    }

    /// Cancel and submit are both disabled while a save is in flight.
    pub fn controls_enabled(&self) -> bool {
        self.phase != FormPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.phase, self.is_edit()) {
            (FormPhase::Submitting, _) => "Guardando…",
            (_, true) => "Actualizar",
            (_, false) => "Guardar",
        }
    }

    /// Applies a keystroke or selection. Clears that field's error right away;
    /// the rest of the map waits for the next submit.
    pub fn change(&mut self, field: FormField, raw: &str) {
        if self.phase == FormPhase::Closed {
            log::warn!("⚠️ [FORM] Change to {:?} on a closed form - ignoring", field);
            return;
        }

        self.values.apply(field, raw);
        self.errors.remove(&field);
        if self.phase == FormPhase::Pristine {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        match self.phase {
            FormPhase::Submitting => {
                log::warn!("⚠️ [FORM] Submit called while already submitting - ignoring");
                return SubmitAttempt::Busy;
            }
            FormPhase::Closed => return SubmitAttempt::Closed,
            _ => {}
        }

        self.phase = FormPhase::Validating;
        self.errors = validate(&self.values);
        if !self.errors.is_empty() {
            log::info!("[FORM] Validation failed on {} field(s)", self.errors.len());
            self.phase = FormPhase::Editing;
            return SubmitAttempt::Invalid(self.errors.clone());
        }

        match self.values.to_payload() {
            Some(payload) => {
                self.phase = FormPhase::Submitting;
                SubmitAttempt::Ready(payload)
            }
            None => {
                // validate() rejects every empty entry, so this is unreachable
                // unless the two drift apart.
                log::error!("❌ [FORM] Valid form produced no payload");
                self.phase = FormPhase::Editing;
                SubmitAttempt::Invalid(self.errors.clone())
            }
        }
    }

    pub fn finish_submit(&mut self, saved: bool) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = if saved { FormPhase::Closed } else { FormPhase::Editing };
    }

    /// Runs validation and, when it passes, the save handler exactly once.
    pub async fn submit_with<F, Fut, E>(&mut self, handler: F) -> SubmitOutcome
    where
        F: FnOnce(ProductPayload) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: std::fmt::Display,
    {
        let payload = match self.begin_submit() {
            SubmitAttempt::Ready(payload) => payload,
            SubmitAttempt::Invalid(_) => return SubmitOutcome::Invalid,
            SubmitAttempt::Busy | SubmitAttempt::Closed => return SubmitOutcome::Busy,
        };

        match handler(payload).await {
            Ok(()) => {
                self.finish_submit(true);
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::error!("❌ [FORM] Failed to save product: {}", e);
                self.finish_submit(false);
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn filled_form() -> ProductForm {
        let mut form = ProductForm::create();
        form.change(FormField::Sku, "X-1");
        form.change(FormField::Name, "X");
        form.change(FormField::CategoryCode, "2");
        form.change(FormField::UnitCode, "1");
        form.change(FormField::StatusCode, "1");
        form.change(FormField::Quantity, "5");
        form.change(FormField::Price, "1.0");
        form
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate(&FormValues::default());
        assert_eq!(errors.len(), FormField::ALL.len());
    }

    #[test]
    fn test_whitespace_sku_is_blank() {
        let mut form = filled_form();
        form.change(FormField::Sku, "   ");
        let errors = match form.begin_submit() {
            SubmitAttempt::Invalid(errors) => errors,
            other => panic!("expected invalid, got {:?}", other),
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&FormField::Sku), Some(&"SKU requerido"));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_negative_values_fail_validation() {
        let mut values = filled_form().values().clone();
        values.quantity = Entry::Value(-1);
        values.price = Entry::Value(-0.5);
        let errors = validate(&values);
        assert!(errors.contains_key(&FormField::Quantity));
        assert!(errors.contains_key(&FormField::Price));
    }

    #[test]
    fn test_change_clears_only_that_field_error() {
        let mut form = ProductForm::create();
        form.begin_submit();
        assert_eq!(form.errors().len(), 7);

        form.change(FormField::Name, "Leche");
        assert!(form.error(FormField::Name).is_none());
        assert_eq!(form.error(FormField::Sku), Some("SKU requerido"));
        assert_eq!(form.errors().len(), 6);
    }

    #[test]
    fn test_phase_transitions() {
        let mut form = ProductForm::create();
        assert_eq!(form.phase(), FormPhase::Pristine);
        assert_eq!(form.submit_label(), "Guardar");

        form = filled_form();
        assert_eq!(form.phase(), FormPhase::Editing);

        assert!(matches!(form.begin_submit(), SubmitAttempt::Ready(_)));
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(!form.controls_enabled());
        assert_eq!(form.submit_label(), "Guardando…");
        assert_eq!(form.begin_submit(), SubmitAttempt::Busy);

        form.finish_submit(false);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.controls_enabled());

        form.begin_submit();
        form.finish_submit(true);
        assert_eq!(form.phase(), FormPhase::Closed);
        assert_eq!(form.begin_submit(), SubmitAttempt::Closed);
    }

    #[tokio::test]
    async fn test_invalid_form_never_calls_handler() {
        let mut form = filled_form();
        form.change(FormField::Sku, "");
        let calls = Cell::new(0);

        let outcome = form
            .submit_with(|_payload| {
                calls.set(calls.get() + 1);
                async { Ok::<(), String>(()) }
            })
            .await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(calls.get(), 0);
        assert!(form.error(FormField::Sku).is_some());
    }

    #[tokio::test]
    async fn test_valid_form_calls_handler_once_with_numbers() {
        let mut form = filled_form();
        let mut received = Vec::new();

        let outcome = form
            .submit_with(|payload| {
                received.push(payload);
                async { Ok::<(), String>(()) }
            })
            .await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(received.len(), 1);
        let payload = &received[0];
        assert_eq!(payload.id, None);
        assert_eq!(payload.category_code, 2);
        assert_eq!(payload.unit_code, 1);
        assert_eq!(payload.status_code, 1);
        assert_eq!(payload.quantity, 5);
        assert_eq!(payload.price, 1.0);
        assert_eq!(form.phase(), FormPhase::Closed);
    }

    #[tokio::test]
    async fn test_failed_handler_returns_to_editing() {
        let mut form = filled_form();
        let outcome = form
            .submit_with(|_payload| async { Err::<(), _>("boom") })
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.controls_enabled());
    }
}
