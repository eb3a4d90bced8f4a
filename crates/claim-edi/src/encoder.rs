//! Record-to-envelope encoding.

use claim_model::ClaimRecord;
use serde::{Deserialize, Serialize};

use crate::segment::{
    COMPONENT_SEPARATOR, REPETITION_SEPARATOR, RESERVED_DELIMITERS, Segment,
};

/// Static identifiers written into every envelope.
///
/// Control numbers are the same for every record of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeOptions {
    /// Interchange sender ID (ISA06, GS02); padded to 15 characters in ISA.
    pub sender_id: String,
    /// Interchange receiver ID (ISA08, GS03); padded to 15 characters in ISA.
    pub receiver_id: String,
    /// ISA09, `YYMMDD`.
    pub interchange_date: String,
    /// ISA10, `HHMM`.
    pub interchange_time: String,
    /// ISA13.
    pub interchange_control_number: String,
    /// ISA15: `T` for test, `P` for production.
    pub usage_indicator: String,
    /// GS04, `YYYYMMDD`.
    pub group_date: String,
    /// GS05.
    pub group_time: String,
    /// GS06 and GE02.
    pub group_control_number: String,
    /// ST02 and SE02.
    pub transaction_control_number: String,
    /// GS08 and ST03.
    pub implementation_reference: String,
    /// SE01.
    pub declared_segment_count: u32,
}

impl Default for EnvelopeOptions {
    fn default() -> Self {
        Self {
            sender_id: "030240928".to_string(),
            receiver_id: "421406317".to_string(),
            interchange_date: "180807".to_string(),
            interchange_time: "1202".to_string(),
            interchange_control_number: "000001507".to_string(),
            usage_indicator: "T".to_string(),
            group_date: "20180807".to_string(),
            group_time: "12022605".to_string(),
            group_control_number: "150700".to_string(),
            transaction_control_number: "0001".to_string(),
            implementation_reference: "005010X222A1".to_string(),
            declared_segment_count: 30,
        }
    }
}

/// Encodes claim records as 837-style envelopes.
#[derive(Debug, Clone, Default)]
pub struct SegmentEncoder {
    options: EnvelopeOptions,
}

impl SegmentEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EnvelopeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EnvelopeOptions {
        &self.options
    }

    /// Build the eleven segments for one record, in output order.
    pub fn segments(&self, record: &ClaimRecord) -> Vec<Segment> {
        let opts = &self.options;
        let member_dob = record
            .member_dob
            .map(|date| date.format("%Y%m%d").to_string())
            .unwrap_or_default();
        let adjusted = record
            .adjusted_charge_amount
            .map(|amount| amount.to_string())
            .unwrap_or_default();

        vec![
            // ISA01 and ISA03 carry their blank authorization fields inline.
            Segment::new("ISA")
                .element("00          ")
                .element("00          ")
                .element("01")
                .element(format!("{:<15}", opts.sender_id))
                .element("30")
                .element(format!("{:<15}", opts.receiver_id))
                .element(&opts.interchange_date)
                .element(&opts.interchange_time)
                .element(REPETITION_SEPARATOR.to_string())
                .element("00501")
                .element(&opts.interchange_control_number)
                .element("0")
                .element(&opts.usage_indicator)
                .element(COMPONENT_SEPARATOR.to_string())
                .unterminated(),
            Segment::new("GS")
                .element("HC")
                .element(&opts.sender_id)
                .element(&opts.receiver_id)
                .element(&opts.group_date)
                .element(&opts.group_time)
                .element(&opts.group_control_number)
                .element("X")
                .element(&opts.implementation_reference),
            Segment::new("ST")
                .element("837")
                .element(&opts.transaction_control_number)
                .element(&opts.implementation_reference),
            Segment::new("NM1")
                .element("IL")
                .element("1")
                .element(&record.member_last_name)
                .element(record.member_first_name.clone().unwrap_or_default())
                .empty(3)
                .element("MI")
                .element(&record.member_id),
            Segment::new("N3").element(&record.subscriber_address),
            Segment::new("N4")
                .element(&record.subscriber_city)
                .element(&record.subscriber_state)
                .element(&record.subscriber_zip),
            Segment::new("DMG")
                .element("D8")
                .element(member_dob)
                .element(&record.subscriber_gender),
            Segment::new("NM1")
                .element("PR")
                .element("2")
                .element(&record.provider_name)
                .empty(4)
                .element("PI")
                .element(&record.provider_npi),
            Segment::new("CLM")
                .element(&record.diagnosis_code)
                .element(adjusted)
                .empty(2)
                .element("11:B:1")
                .element("Y")
                .element("A")
                .element("Y")
                .element("Y"),
            Segment::new("SE")
                .element(opts.declared_segment_count.to_string())
                .element(&opts.transaction_control_number),
            Segment::new("GE")
                .element("1")
                .element(&opts.group_control_number),
        ]
    }

    /// Encode one record as a newline-separated envelope.
    pub fn encode(&self, record: &ClaimRecord) -> String {
        let mut block = String::new();
        for segment in self.segments(record) {
            block.push_str(&segment.to_string());
            block.push('\n');
        }
        block
    }

    /// Encode records in order and concatenate their envelopes.
    pub fn encode_all(&self, records: &[ClaimRecord]) -> String {
        records.iter().map(|record| self.encode(record)).collect()
    }
}

/// Names of the fields of `record` whose value contains a reserved delimiter.
pub fn delimiter_conflicts(record: &ClaimRecord) -> Vec<&'static str> {
    let fields: [(&'static str, Option<&str>); 11] = [
        ("MemberLastName", Some(record.member_last_name.as_str())),
        ("MemberFirstName", record.member_first_name.as_deref()),
        ("MemberID", Some(record.member_id.as_str())),
        ("SubscriberAddress", Some(record.subscriber_address.as_str())),
        ("SubscriberCity", Some(record.subscriber_city.as_str())),
        ("SubscriberState", Some(record.subscriber_state.as_str())),
        ("SubscriberZip", Some(record.subscriber_zip.as_str())),
        ("SubscriberGender", Some(record.subscriber_gender.as_str())),
        ("ProviderName", Some(record.provider_name.as_str())),
        ("ProviderNPI", Some(record.provider_npi.as_str())),
        ("DiagnosisCode", Some(record.diagnosis_code.as_str())),
    ];
    fields
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .filter(|value| value.contains(RESERVED_DELIMITERS))
                .map(|_| name)
        })
        .collect()
}
