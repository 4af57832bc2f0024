// Shared key columns
pub const BENEFICIARY_ID: &str = "desynpuf_id";
pub const SAMPLE_NUMBER: &str = "sample_number";

// Claims
pub const CLAIM_ID: &str = "clm_id";
pub const CLAIM_FROM_DT: &str = "clm_from_dt";
pub const CLAIM_THRU_DT: &str = "clm_thru_dt";
pub const CLAIM_FROM_DATE: &str = "clm_from_date";
pub const CLAIM_THRU_DATE: &str = "clm_thru_date";
pub const CLAIM_START_YEAR: &str = "clm_start_year";
pub const CLAIM_START_MONTH: &str = "clm_start_month";
pub const CLAIM_START_DAY: &str = "clm_start_day";
pub const UTILIZATION_DAY_COUNT: &str = "clm_utlztn_day_cnt";
pub const UTILIZATION_DAY_COUNT_GROUPED: &str = "clm_utlztn_day_cnt_grouped";
pub const PROVIDER_NUMBER: &str = "prvdr_num";
pub const PROVIDER_NUMBER_GROUPED: &str = "prvdr_num_grp";
pub const ATTENDING_PHYSICIAN_NPI: &str = "at_physn_npi";
pub const DRG_CODE: &str = "clm_drg_cd";
pub const DRG_CODE_GROUPED: &str = "clm_drg_cd_grp";
pub const PAYMENT_AMOUNT: &str = "clm_pmt_amt";

pub const REQUIRED_CLAIM_COLUMNS: [&str; 10] = [
    CLAIM_ID,
    BENEFICIARY_ID,
    SAMPLE_NUMBER,
    CLAIM_FROM_DT,
    CLAIM_THRU_DT,
    UTILIZATION_DAY_COUNT,
    PROVIDER_NUMBER,
    ATTENDING_PHYSICIAN_NPI,
    DRG_CODE,
    PAYMENT_AMOUNT,
];

/// Columns of the core claims table that precede the collapsed code columns.
pub const CORE_CLAIM_KEY_COLUMNS: [&str; 16] = [
    CLAIM_ID,
    BENEFICIARY_ID,
    SAMPLE_NUMBER,
    CLAIM_START_YEAR,
    CLAIM_START_MONTH,
    CLAIM_START_DAY,
    CLAIM_FROM_DATE,
    CLAIM_THRU_DATE,
    UTILIZATION_DAY_COUNT,
    UTILIZATION_DAY_COUNT_GROUPED,
    PROVIDER_NUMBER,
    PROVIDER_NUMBER_GROUPED,
    ATTENDING_PHYSICIAN_NPI,
    DRG_CODE,
    DRG_CODE_GROUPED,
    PAYMENT_AMOUNT,
];

pub const OTHER_CATEGORY: &str = "Other";
pub const DEFAULT_FREQUENCY_THRESHOLD: usize = 100;

// Beneficiary summaries
pub const BIRTH_DATE: &str = "bene_birth_dt";
pub const SEX_CODE: &str = "bene_sex_ident_cd";
pub const RACE_CODE: &str = "bene_race_cd";
pub const STATE_CODE: &str = "sp_state_code";
pub const COUNTY_CODE: &str = "bene_county_cd";
pub const DEATH_DT: &str = "bene_death_dt";

pub const BENEFICIARY_KEY_COLUMNS: [&str; 5] =
    [BENEFICIARY_ID, BIRTH_DATE, SEX_CODE, RACE_CODE, SAMPLE_NUMBER];

pub const YEAR_SPECIFIC_COLUMNS: [&str; 17] = [
    STATE_CODE,
    COUNTY_CODE,
    DEATH_DT,
    "bene_esrd_ind",
    "bene_hi_cvrage_tot_mons",
    "bene_smi_cvrage_tot_mons",
    "bene_hmo_cvrage_tot_mons",
    "plan_cvrg_mos_num",
    "medreimb_ip",
    "benres_ip",
    "pppymt_ip",
    "medreimb_op",
    "benres_op",
    "pppymt_op",
    "medreimb_car",
    "benres_car",
    "pppymt_car",
];

/// Chronic-condition flags, encoded as 1 = no and 2 = yes.
pub const CHRONIC_CONDITION_FLAGS: [&str; 11] = [
    "sp_alzhdmta",
    "sp_chf",
    "sp_chrnkidn",
    "sp_cncr",
    "sp_copd",
    "sp_depressn",
    "sp_diabetes",
    "sp_ischmcht",
    "sp_osteoprs",
    "sp_ra_oa",
    "sp_strketia",
];

pub const CHRONIC_CONDITION_COUNT: &str = "chronic_condition_count";
pub const COLLAPSED_STATES: &str = "collapsed_states";
pub const COLLAPSED_COUNTIES: &str = "collapsed_counties";

pub const DEATH_DATE: &str = "death_date";
pub const DEATH_YEAR: &str = "death_year";
pub const DEATH_MONTH: &str = "death_month";
pub const DEATH_DAY: &str = "death_day";
pub const DEATH_BEFORE_CLAIM_IND: &str = "death_before_claim_ind";

pub const DEFAULT_DEATH_DATE_YEARS: [u16; 3] = [2008, 2009, 2010];

pub const DEFAULT_CLAIMS_PATTERN: &str = "*Inpatient_Claims_Sample_*";
pub const DEFAULT_SUMMARY_PATTERN: &str = "*_Beneficiary_Summary_File_Sample_*";

/// Name of a year-specific summary column, e.g. `bene_death_dt_2009`.
pub fn year_suffixed(column: &str, year: u16) -> String {
    format!("{column}_{year}")
}
