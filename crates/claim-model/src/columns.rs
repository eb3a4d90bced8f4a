//! Input column names.

/// Column name constants for the claim input table.
pub mod column {
    pub const MEMBER_FIRST_NAME: &str = "MemberFirstName";
    pub const MEMBER_LAST_NAME: &str = "MemberLastName";
    pub const MEMBER_DOB: &str = "MemberDOB";
    pub const MEMBER_ID: &str = "MemberID";
    pub const SUBSCRIBER_ADDRESS: &str = "SubscriberAddress";
    pub const SUBSCRIBER_CITY: &str = "SubscriberCity";
    pub const SUBSCRIBER_STATE: &str = "SubscriberState";
    pub const SUBSCRIBER_ZIP: &str = "SubscriberZip";
    pub const SUBSCRIBER_GENDER: &str = "SubscriberGender";
    pub const PROVIDER_NAME: &str = "ProviderName";
    pub const PROVIDER_NPI: &str = "ProviderNPI";
    pub const DIAGNOSIS_CODE: &str = "DiagnosisCode";
    pub const CHARGE_AMOUNT: &str = "ChargeAmount";
    pub const SERVICE_START_DATE: &str = "ServiceStartDate";
}

/// Columns that must be present in every claim input table, in input order.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    column::MEMBER_FIRST_NAME,
    column::MEMBER_LAST_NAME,
    column::MEMBER_DOB,
    column::MEMBER_ID,
    column::SUBSCRIBER_ADDRESS,
    column::SUBSCRIBER_CITY,
    column::SUBSCRIBER_STATE,
    column::SUBSCRIBER_ZIP,
    column::SUBSCRIBER_GENDER,
    column::PROVIDER_NAME,
    column::PROVIDER_NPI,
    column::DIAGNOSIS_CODE,
    column::CHARGE_AMOUNT,
    column::SERVICE_START_DATE,
];
