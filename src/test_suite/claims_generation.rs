use crate::test_suite::archives::{csv_line, frame_from_csv};
use polars::prelude::DataFrame;

pub(crate) const CLAIM_HEADERS: [&str; 17] = [
    "DESYNPUF_ID",
    "CLM_ID",
    "sample_number",
    "CLM_FROM_DT",
    "CLM_THRU_DT",
    "PRVDR_NUM",
    "CLM_PMT_AMT",
    "AT_PHYSN_NPI",
    "OP_PHYSN_NPI",
    "CLM_UTLZTN_DAY_CNT",
    "CLM_DRG_CD",
    "ICD9_DGNS_CD_1",
    "ICD9_DGNS_CD_2",
    "ICD9_DGNS_CD_3",
    "ICD9_PRCDR_CD_1",
    "ICD9_PRCDR_CD_2",
    "HCPCS_CD_1",
];

#[derive(Debug, Clone)]
pub(crate) struct ClaimRow {
    beneficiary_id: String,
    claim_id: String,
    sample_number: String,
    from_dt: Option<String>,
    thru_dt: Option<String>,
    provider: Option<String>,
    payment: Option<String>,
    attending_npi: Option<String>,
    operating_npi: Option<String>,
    day_count: Option<String>,
    drg: Option<String>,
    diagnoses: [Option<String>; 3],
    procedures: [Option<String>; 2],
    hcpcs: Option<String>,
}

pub(crate) fn claim_row(claim_id: &str, beneficiary_id: &str, sample_number: &str) -> ClaimRow {
    ClaimRow {
        beneficiary_id: beneficiary_id.to_string(),
        claim_id: claim_id.to_string(),
        sample_number: sample_number.to_string(),
        from_dt: Some("20080103".to_string()),
        thru_dt: Some("20080110".to_string()),
        provider: Some("2600GD".to_string()),
        payment: Some("4000".to_string()),
        attending_npi: Some("1234".to_string()),
        operating_npi: None,
        day_count: Some("5".to_string()),
        drg: Some("217".to_string()),
        diagnoses: [None, None, None],
        procedures: [None, None],
        hcpcs: None,
    }
}

pub(crate) fn default_claim() -> ClaimRow {
    claim_row("C1", "B1", "1")
}

impl ClaimRow {
    pub(crate) fn with_dates(mut self, from: Option<&str>, thru: Option<&str>) -> Self {
        self.from_dt = from.map(str::to_string);
        self.thru_dt = thru.map(str::to_string);
        self
    }

    pub(crate) fn with_days(mut self, days: Option<&str>) -> Self {
        self.day_count = days.map(str::to_string);
        self
    }

    pub(crate) fn with_drg(mut self, drg: Option<&str>) -> Self {
        self.drg = drg.map(str::to_string);
        self
    }

    pub(crate) fn with_diagnoses(mut self, codes: &[&str]) -> Self {
        for (slot, code) in self.diagnoses.iter_mut().zip(codes) {
            *slot = Some(code.to_string());
        }
        self
    }

    pub(crate) fn with_procedures(mut self, codes: &[&str]) -> Self {
        for (slot, code) in self.procedures.iter_mut().zip(codes) {
            *slot = Some(code.to_string());
        }
        self
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut values = vec![
            Some(self.beneficiary_id.clone()),
            Some(self.claim_id.clone()),
            Some(self.sample_number.clone()),
            self.from_dt.clone(),
            self.thru_dt.clone(),
            self.provider.clone(),
            self.payment.clone(),
            self.attending_npi.clone(),
            self.operating_npi.clone(),
            self.day_count.clone(),
            self.drg.clone(),
        ];
        values.extend(self.diagnoses.iter().cloned());
        values.extend(self.procedures.iter().cloned());
        values.push(self.hcpcs.clone());
        values
    }
}

pub(crate) fn claims_frame(rows: &[ClaimRow]) -> DataFrame {
    let mut lines = vec![CLAIM_HEADERS.join(",")];
    lines.extend(rows.iter().map(|row| csv_line(&row.values())));
    frame_from_csv(&format!("{}\n", lines.join("\n")))
}
