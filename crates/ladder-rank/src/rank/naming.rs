/// Label for tiers without divisions (unranked and top tier)
pub const BLANK_NAME: &str = " ";
/// Label for a tier or division outside the ladder
pub const ERROR_NAME: &str = "ERROR";

const DIVISION_NAMES: [&str; 4] = ["DIV I", "DIV II", "DIV III", "DIV IV"];

/// Display label for a raw tier/division pair.
///
/// Never fails: out-of-ladder input yields [`ERROR_NAME`].
pub fn division_name(tier: i32, division: i32) -> &'static str {
    if !(0..=22).contains(&tier) {
        return ERROR_NAME;
    }

    if tier == 0 || tier == 22 {
        return BLANK_NAME;
    }

    usize::try_from(division)
        .ok()
        .and_then(|d| DIVISION_NAMES.get(d).copied())
        .unwrap_or(ERROR_NAME)
}
