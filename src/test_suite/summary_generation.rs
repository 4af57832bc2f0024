use crate::test_suite::archives::{csv_line, frame_from_csv};
use polars::prelude::DataFrame;

pub(crate) const SUMMARY_HEADERS: [&str; 32] = [
    "DESYNPUF_ID",
    "BENE_BIRTH_DT",
    "BENE_DEATH_DT",
    "BENE_SEX_IDENT_CD",
    "BENE_RACE_CD",
    "BENE_ESRD_IND",
    "SP_STATE_CODE",
    "BENE_COUNTY_CD",
    "BENE_HI_CVRAGE_TOT_MONS",
    "BENE_SMI_CVRAGE_TOT_MONS",
    "BENE_HMO_CVRAGE_TOT_MONS",
    "PLAN_CVRG_MOS_NUM",
    "SP_ALZHDMTA",
    "SP_CHF",
    "SP_CHRNKIDN",
    "SP_CNCR",
    "SP_COPD",
    "SP_DEPRESSN",
    "SP_DIABETES",
    "SP_ISCHMCHT",
    "SP_OSTEOPRS",
    "SP_RA_OA",
    "SP_STRKETIA",
    "MEDREIMB_IP",
    "BENRES_IP",
    "PPPYMT_IP",
    "MEDREIMB_OP",
    "BENRES_OP",
    "PPPYMT_OP",
    "MEDREIMB_CAR",
    "BENRES_CAR",
    "PPPYMT_CAR",
];

#[derive(Debug, Clone)]
pub(crate) struct SummaryRow {
    beneficiary_id: String,
    birth_dt: String,
    death_dt: Option<String>,
    sex: String,
    race: String,
    state: Option<String>,
    county: Option<String>,
    flags: [Option<String>; 11],
}

pub(crate) fn summary_row(beneficiary_id: &str) -> SummaryRow {
    SummaryRow {
        beneficiary_id: beneficiary_id.to_string(),
        birth_dt: "19230501".to_string(),
        death_dt: None,
        sex: "1".to_string(),
        race: "1".to_string(),
        state: Some("26".to_string()),
        county: Some("950".to_string()),
        flags: std::array::from_fn(|_| Some("1".to_string())),
    }
}

impl SummaryRow {
    pub(crate) fn with_death(mut self, death_dt: Option<&str>) -> Self {
        self.death_dt = death_dt.map(str::to_string);
        self
    }

    pub(crate) fn with_location(mut self, state: &str, county: &str) -> Self {
        self.state = Some(state.to_string());
        self.county = Some(county.to_string());
        self
    }

    pub(crate) fn with_birth(mut self, birth_dt: &str) -> Self {
        self.birth_dt = birth_dt.to_string();
        self
    }

    /// Sets the first `count` chronic-condition flags to "yes" (2).
    pub(crate) fn with_conditions(mut self, count: usize) -> Self {
        for flag in self.flags.iter_mut().take(count) {
            *flag = Some("2".to_string());
        }
        self
    }

    pub(crate) fn with_flag(mut self, idx: usize, value: Option<&str>) -> Self {
        self.flags[idx] = value.map(str::to_string);
        self
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut values = vec![
            Some(self.beneficiary_id.clone()),
            Some(self.birth_dt.clone()),
            self.death_dt.clone(),
            Some(self.sex.clone()),
            Some(self.race.clone()),
            Some("0".to_string()),
            self.state.clone(),
            self.county.clone(),
            Some("12".to_string()),
            Some("12".to_string()),
            Some("0".to_string()),
            Some("0".to_string()),
        ];
        values.extend(self.flags.iter().cloned());
        values.extend((0..9).map(|_| Some("0".to_string())));
        values
    }
}

pub(crate) fn summary_csv(rows: &[SummaryRow]) -> String {
    let mut lines = vec![SUMMARY_HEADERS.join(",")];
    lines.extend(rows.iter().map(|row| csv_line(&row.values())));
    format!("{}\n", lines.join("\n"))
}

pub(crate) fn summary_frame(rows: &[SummaryRow]) -> DataFrame {
    frame_from_csv(&summary_csv(rows))
}
