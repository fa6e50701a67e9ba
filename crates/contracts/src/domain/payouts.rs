use serde::{Deserialize, Serialize};

/// Destination type for organizer settlement funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MethodType {
    #[default]
    BankAccount,
    Momo,
}

impl MethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodType::BankAccount => "bank_account",
            MethodType::Momo => "momo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MethodType::BankAccount => "Bank account",
            MethodType::Momo => "MoMo wallet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountDetails {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
}

impl BankAccountDetails {
    pub fn is_empty(&self) -> bool {
        self.bank_name.is_empty() && self.account_number.is_empty() && self.account_holder.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MomoDetails {
    pub phone_number: String,
    pub owner_name: String,
}

impl MomoDetails {
    pub fn is_empty(&self) -> bool {
        self.phone_number.is_empty() && self.owner_name.is_empty()
    }
}

/// A payout method persisted server-side. Detail fields are echoed back into
/// the form value verbatim when the method is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutMethod {
    pub id: String,
    pub method_type: MethodType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankAccountDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momo_details: Option<MomoDetails>,
    #[serde(default)]
    pub is_default: bool,
}

/// The payout-method value a parent form sees: either a reference to a saved
/// method (`payout_method_id` set) or the in-progress draft (id empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PayoutMethodFormValue {
    pub payout_method_id: Option<String>,
    pub method_type: MethodType,
    pub bank_details: BankAccountDetails,
    pub momo_details: MomoDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayoutMethodDto {
    pub method_type: MethodType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankAccountDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momo_details: Option<MomoDetails>,
    pub is_default: bool,
}

impl CreatePayoutMethodDto {
    /// Build a create request from the draft, dropping the sub-fields of the
    /// type not being submitted.
    pub fn from_form_value(value: &PayoutMethodFormValue, is_default: bool) -> Self {
        match value.method_type {
            MethodType::BankAccount => Self {
                method_type: MethodType::BankAccount,
                bank_details: Some(value.bank_details.clone()),
                momo_details: None,
                is_default,
            },
            MethodType::Momo => Self {
                method_type: MethodType::Momo,
                bank_details: None,
                momo_details: Some(value.momo_details.clone()),
                is_default,
            },
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.method_type {
            MethodType::BankAccount => {
                let details = self
                    .bank_details
                    .as_ref()
                    .ok_or("Bank account details are required")?;
                if details.bank_name.trim().is_empty() {
                    return Err("Bank name is required".into());
                }
                if details.account_number.trim().is_empty() {
                    return Err("Account number is required".into());
                }
                if !details
                    .account_number
                    .chars()
                    .all(|c| c.is_ascii_digit())
                {
                    return Err("Account number must contain digits only".into());
                }
                if details.account_holder.trim().is_empty() {
                    return Err("Account holder name is required".into());
                }
            }
            MethodType::Momo => {
                let details = self
                    .momo_details
                    .as_ref()
                    .ok_or("MoMo wallet details are required")?;
                let digits: String = details
                    .phone_number
                    .chars()
                    .filter(|c| c.is_ascii_digit())
                    .collect();
                if digits.len() != 10 {
                    return Err("MoMo phone number must have 10 digits".into());
                }
                if details.owner_name.trim().is_empty() {
                    return Err("Wallet owner name is required".into());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_round_trip() {
        // The saved-method shape must survive a JSON round trip untouched:
        // the reconciler echoes these fields verbatim into the form value.
        let json = r#"{
            "id": "m2",
            "methodType": "bank_account",
            "bankDetails": {
                "bankName": "Vietcombank",
                "accountNumber": "0071000123456",
                "accountHolder": "TRAN THI B"
            },
            "isDefault": true
        }"#;
        let method: PayoutMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method.method_type, MethodType::BankAccount);
        assert!(method.momo_details.is_none());

        let back = serde_json::to_string(&method).unwrap();
        let again: PayoutMethod = serde_json::from_str(&back).unwrap();
        assert_eq!(method, again);
    }

    #[test]
    fn test_create_dto_drops_other_type() {
        let mut value = PayoutMethodFormValue::default();
        value.method_type = MethodType::Momo;
        value.momo_details.phone_number = "0901234567".into();
        value.momo_details.owner_name = "Nguyen Van A".into();
        value.bank_details.bank_name = "stale".into();

        let dto = CreatePayoutMethodDto::from_form_value(&value, false);
        assert!(dto.bank_details.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_phone() {
        let dto = CreatePayoutMethodDto {
            method_type: MethodType::Momo,
            bank_details: None,
            momo_details: Some(MomoDetails {
                phone_number: "090123".into(),
                owner_name: "Nguyen Van A".into(),
            }),
            is_default: false,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_numeric_account() {
        let dto = CreatePayoutMethodDto {
            method_type: MethodType::BankAccount,
            bank_details: Some(BankAccountDetails {
                bank_name: "ACB".into(),
                account_number: "12-34".into(),
                account_holder: "LE VAN C".into(),
            }),
            momo_details: None,
            is_default: false,
        };
        assert!(dto.validate().is_err());
    }
}
