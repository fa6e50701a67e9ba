//! Selection state for the payout-method form.
//!
//! Three sources of truth meet here: the server's saved-method list, the
//! in-progress draft, and the user's last in-session pick. The reconciler
//! folds them into one consistent selection plus the form value the parent
//! form sees. It is a plain struct with no reactive or network dependencies;
//! the view-model owns all of those.

use contracts::domain::payouts::{
    BankAccountDetails, MethodType, MomoDetails, PayoutMethod, PayoutMethodFormValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutTab {
    Saved,
    Create,
}

#[derive(Debug, Clone)]
pub struct PayoutMethodReconciler {
    saved_methods: Vec<PayoutMethod>,
    active_tab: PayoutTab,
    selected_saved_id: Option<String>,
    /// Sticky across tab switches: lets "saved" re-select what the user last
    /// picked even after a detour through the create form.
    last_selected_saved_id: Option<String>,
    value: PayoutMethodFormValue,
    initialized: bool,
}

impl Default for PayoutMethodReconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl PayoutMethodReconciler {
    pub fn new() -> Self {
        Self {
            saved_methods: Vec::new(),
            active_tab: PayoutTab::Create,
            selected_saved_id: None,
            last_selected_saved_id: None,
            value: PayoutMethodFormValue::default(),
            initialized: false,
        }
    }

    pub fn saved_methods(&self) -> &[PayoutMethod] {
        &self.saved_methods
    }

    pub fn active_tab(&self) -> PayoutTab {
        self.active_tab
    }

    pub fn selected_saved_id(&self) -> Option<&str> {
        self.selected_saved_id.as_deref()
    }

    /// The value communicated upward: a saved-method reference when
    /// `payout_method_id` is set, the draft otherwise.
    pub fn value(&self) -> &PayoutMethodFormValue {
        &self.value
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn contains(&self, id: &str) -> bool {
        self.saved_methods.iter().any(|m| m.id == id)
    }

    /// Adopt the first successful fetch. Runs at most once: refetches after
    /// the user has started interacting must not clobber their state.
    pub fn initialize(&mut self, existing_id: Option<&str>, methods: Vec<PayoutMethod>) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.saved_methods = methods;

        match existing_id {
            Some(id) if self.contains(id) => {
                self.select_saved_method(id);
            }
            _ if self.saved_methods.is_empty() => {
                self.active_tab = PayoutTab::Create;
            }
            existing => {
                // A stale reference (method deleted elsewhere) or no
                // reference at all: stay on "saved" with nothing selected.
                if existing.is_some() {
                    log::warn!("payout method reference not in fetched list, dropping it");
                }
                self.active_tab = PayoutTab::Saved;
                self.selected_saved_id = None;
                self.value.payout_method_id = None;
            }
        }
    }

    /// The initial fetch failed: degrade to the create form. The page keeps
    /// its own retryable error state.
    pub fn fetch_failed(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.saved_methods.clear();
        self.active_tab = PayoutTab::Create;
    }

    /// Select a saved method and copy its details verbatim into the form
    /// value, clearing the other type's fields. Returns false for an unknown
    /// id.
    pub fn select_saved_method(&mut self, id: &str) -> bool {
        let Some(method) = self.saved_methods.iter().find(|m| m.id == id).cloned() else {
            return false;
        };

        self.active_tab = PayoutTab::Saved;
        self.selected_saved_id = Some(method.id.clone());
        self.last_selected_saved_id = Some(method.id.clone());

        self.value.payout_method_id = Some(method.id.clone());
        self.value.method_type = method.method_type;
        match method.method_type {
            MethodType::BankAccount => {
                self.value.bank_details = method.bank_details.unwrap_or_default();
                self.value.momo_details = MomoDetails::default();
            }
            MethodType::Momo => {
                self.value.momo_details = method.momo_details.unwrap_or_default();
                self.value.bank_details = BankAccountDetails::default();
            }
        }
        true
    }

    /// Toggle the draft's method type.
    ///
    /// Wallet details are wiped when the wallet type is abandoned; bank
    /// details survive a detour through the wallet form so toggling back
    /// restores the user's typing. The submission payload is guarded
    /// separately (`CreatePayoutMethodDto::from_form_value` drops the
    /// inactive type), so surviving draft fields never leak into a request.
    pub fn switch_method_type(&mut self, new_type: MethodType) {
        if self.value.method_type == new_type {
            return;
        }
        if self.value.method_type == MethodType::Momo {
            self.value.momo_details = MomoDetails::default();
        }
        self.value.method_type = new_type;
    }

    pub fn switch_tab(&mut self, tab: PayoutTab) {
        if self.active_tab == tab {
            return;
        }
        match tab {
            PayoutTab::Create => {
                self.active_tab = PayoutTab::Create;
                self.selected_saved_id = None;
                self.value.payout_method_id = None;
                // Only a pristine draft snaps back to the default type;
                // detail data already present keeps its type.
                if self.value.bank_details.is_empty() && self.value.momo_details.is_empty() {
                    self.value.method_type = MethodType::BankAccount;
                }
            }
            PayoutTab::Saved => {
                self.active_tab = PayoutTab::Saved;
                let candidate = self
                    .last_selected_saved_id
                    .clone()
                    .filter(|id| self.contains(id))
                    .or_else(|| {
                        self.value
                            .payout_method_id
                            .clone()
                            .filter(|id| self.contains(id))
                    })
                    .or_else(|| self.saved_methods.first().map(|m| m.id.clone()));
                match candidate {
                    Some(id) => {
                        self.select_saved_method(&id);
                    }
                    None => {
                        self.selected_saved_id = None;
                    }
                }
            }
        }
    }

    /// Apply a server-confirmed creation: the new method joins the list and
    /// becomes the selection.
    pub fn method_created(&mut self, method: PayoutMethod) {
        let id = method.id.clone();
        self.saved_methods.push(method);
        self.select_saved_method(&id);
    }

    /// Apply a server-confirmed deletion. Never called on failure, which is
    /// what keeps a failed delete from touching the selection.
    pub fn method_deleted(&mut self, id: &str) {
        self.saved_methods.retain(|m| m.id != id);
        if self.last_selected_saved_id.as_deref() == Some(id) {
            // A deleted id could never resolve again; dropping it keeps the
            // fallback chain honest.
            self.last_selected_saved_id = None;
        }
        if self.selected_saved_id.as_deref() == Some(id) {
            self.selected_saved_id = None;
            self.value.payout_method_id = None;
            self.active_tab = PayoutTab::Create;
        }
    }

    pub fn update_bank_details(&mut self, update: impl FnOnce(&mut BankAccountDetails)) {
        update(&mut self.value.bank_details);
    }

    pub fn update_momo_details(&mut self, update: impl FnOnce(&mut MomoDetails)) {
        update(&mut self.value.momo_details);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank_method(id: &str) -> PayoutMethod {
        PayoutMethod {
            id: id.to_string(),
            method_type: MethodType::BankAccount,
            bank_details: Some(BankAccountDetails {
                bank_name: "Vietcombank".into(),
                account_number: "0071000123456".into(),
                account_holder: "TRAN THI B".into(),
            }),
            momo_details: None,
            is_default: false,
        }
    }

    fn momo_method(id: &str) -> PayoutMethod {
        PayoutMethod {
            id: id.to_string(),
            method_type: MethodType::Momo,
            bank_details: None,
            momo_details: Some(MomoDetails {
                phone_number: "0901234567".into(),
                owner_name: "NGUYEN VAN A".into(),
            }),
            is_default: false,
        }
    }

    #[test]
    fn test_initialize_selects_referenced_method() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(Some("m2"), vec![bank_method("m1"), momo_method("m2")]);

        assert_eq!(r.active_tab(), PayoutTab::Saved);
        assert_eq!(r.selected_saved_id(), Some("m2"));
        assert_eq!(r.value().payout_method_id.as_deref(), Some("m2"));
        assert_eq!(r.value().method_type, MethodType::Momo);
        assert_eq!(r.value().momo_details.phone_number, "0901234567");
        assert!(r.value().bank_details.is_empty());
    }

    #[test]
    fn test_initialize_with_stale_reference() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(Some("gone"), vec![bank_method("m1")]);

        assert_eq!(r.active_tab(), PayoutTab::Saved);
        assert_eq!(r.selected_saved_id(), None);
        assert_eq!(r.value().payout_method_id, None);
    }

    #[test]
    fn test_initialize_with_empty_list_falls_back_to_create() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(Some("gone"), vec![]);
        assert_eq!(r.active_tab(), PayoutTab::Create);
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(Some("m1"), vec![bank_method("m1")]);
        r.select_saved_method("m1");

        // A refetch must not clobber what the user has in front of them.
        r.initialize(None, vec![]);
        assert_eq!(r.selected_saved_id(), Some("m1"));
        assert_eq!(r.saved_methods().len(), 1);
    }

    #[test]
    fn test_fetch_failure_degrades_to_create() {
        let mut r = PayoutMethodReconciler::new();
        r.fetch_failed();
        assert!(r.is_initialized());
        assert_eq!(r.active_tab(), PayoutTab::Create);
        assert!(r.saved_methods().is_empty());
    }

    #[test]
    fn test_tab_round_trip_restores_last_selection() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(Some("m2"), vec![bank_method("m1"), momo_method("m2")]);

        r.switch_tab(PayoutTab::Create);
        assert_eq!(r.selected_saved_id(), None);
        assert_eq!(r.value().payout_method_id, None);

        r.switch_tab(PayoutTab::Saved);
        assert_eq!(r.selected_saved_id(), Some("m2"));
        assert_eq!(r.value().payout_method_id.as_deref(), Some("m2"));
    }

    #[test]
    fn test_switch_to_saved_falls_back_to_first_method() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(None, vec![bank_method("m1"), momo_method("m2")]);
        assert_eq!(r.selected_saved_id(), None);

        r.switch_tab(PayoutTab::Create);
        r.switch_tab(PayoutTab::Saved);
        assert_eq!(r.selected_saved_id(), Some("m1"));
    }

    #[test]
    fn test_fallback_skips_deleted_sticky_selection() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(Some("m1"), vec![bank_method("m1"), momo_method("m2")]);

        r.switch_tab(PayoutTab::Create);
        r.method_deleted("m1");
        r.switch_tab(PayoutTab::Saved);

        assert_eq!(r.selected_saved_id(), Some("m2"));
    }

    #[test]
    fn test_switch_to_saved_with_empty_list_selects_nothing() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(None, vec![bank_method("m1")]);
        r.method_deleted("m1");
        assert_eq!(r.active_tab(), PayoutTab::Saved);

        r.switch_tab(PayoutTab::Create);
        r.switch_tab(PayoutTab::Saved);
        assert_eq!(r.selected_saved_id(), None);
    }

    #[test]
    fn test_delete_of_selected_method_forces_create() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(Some("m2"), vec![bank_method("m1"), momo_method("m2")]);

        r.method_deleted("m2");
        assert_eq!(r.active_tab(), PayoutTab::Create);
        assert_eq!(r.selected_saved_id(), None);
        assert_eq!(r.value().payout_method_id, None);
        assert_eq!(r.saved_methods().len(), 1);
    }

    #[test]
    fn test_delete_of_other_method_keeps_selection() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(Some("m2"), vec![bank_method("m1"), momo_method("m2")]);

        r.method_deleted("m1");
        assert_eq!(r.active_tab(), PayoutTab::Saved);
        assert_eq!(r.selected_saved_id(), Some("m2"));
    }

    #[test]
    fn test_type_toggle_preserves_bank_draft_and_clears_momo() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(None, vec![]);
        assert_eq!(r.value().method_type, MethodType::BankAccount);

        r.update_bank_details(|d| {
            d.bank_name = "ACB".into();
            d.account_number = "123".into();
        });

        r.switch_method_type(MethodType::Momo);
        r.update_momo_details(|d| d.phone_number = "0909".into());

        r.switch_method_type(MethodType::BankAccount);
        assert_eq!(r.value().bank_details.bank_name, "ACB");
        assert_eq!(r.value().bank_details.account_number, "123");
        assert!(r.value().momo_details.is_empty());
    }

    #[test]
    fn test_switch_to_create_keeps_type_of_existing_draft() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(Some("m2"), vec![momo_method("m2")]);
        assert_eq!(r.value().method_type, MethodType::Momo);

        // The copied momo details count as existing data, so the type stays.
        r.switch_tab(PayoutTab::Create);
        assert_eq!(r.value().method_type, MethodType::Momo);
    }

    #[test]
    fn test_switch_to_create_defaults_type_for_pristine_draft() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(None, vec![momo_method("m2")]);
        r.switch_tab(PayoutTab::Create);
        // switch_tab(Saved) then back: selecting m2 fills momo details...
        r.switch_tab(PayoutTab::Saved);
        assert_eq!(r.value().method_type, MethodType::Momo);

        // ...but a reconciler that never held detail data defaults to bank.
        let mut fresh = PayoutMethodReconciler::new();
        fresh.initialize(None, vec![momo_method("m2")]);
        assert_eq!(fresh.active_tab(), PayoutTab::Saved);
        fresh.switch_tab(PayoutTab::Create);
        assert_eq!(fresh.value().method_type, MethodType::BankAccount);
    }

    #[test]
    fn test_method_created_becomes_selection() {
        let mut r = PayoutMethodReconciler::new();
        r.initialize(None, vec![]);
        assert_eq!(r.active_tab(), PayoutTab::Create);

        r.method_created(bank_method("m7"));
        assert_eq!(r.active_tab(), PayoutTab::Saved);
        assert_eq!(r.selected_saved_id(), Some("m7"));
        assert_eq!(r.value().payout_method_id.as_deref(), Some("m7"));
    }
}
