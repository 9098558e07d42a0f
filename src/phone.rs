// Brazilian mobile number mask: +55 (DD) 9XXXX-XXXX

pub const COUNTRY_CODE: &str = "55";
pub const DISPLAY_PREFIX: &str = "+55";
/// What the field shows before the user types anything.
pub const EMPTY_FIELD: &str = "+55 ";

// 55 + DDD(2) + up to 9 subscriber digits
const MAX_DIGITS: usize = 13;

pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Masks whatever is in the field. The country code is never typed by the
/// user, so it is synthesized when missing.
pub fn format_brazil_phone(input: &str) -> String {
    let mut digits = only_digits(input);
    if !digits.starts_with(COUNTRY_CODE) {
        digits.insert_str(0, COUNTRY_CODE);
    }
    digits.truncate(MAX_DIGITS);

    let rest = &digits[COUNTRY_CODE.len()..];
    let (ddd, number) = rest.split_at(rest.len().min(2));

    let mut formatted = String::from(DISPLAY_PREFIX);
    if !ddd.is_empty() {
        formatted.push_str(" (");
        formatted.push_str(ddd);
        if ddd.len() == 2 {
            formatted.push(')');
        }
    }

    match number.len() {
        0 => {}
        1..=5 => {
            formatted.push(' ');
            formatted.push_str(number);
        }
        6..=9 => {
            let (first, last) = number.split_at(number.len() - 4);
            formatted.push(' ');
            formatted.push_str(first);
            formatted.push('-');
            formatted.push_str(last);
        }
        _ => {
            // Not reachable under the 13 digit cap, kept for longer caps.
            let (first, tail) = number.split_at(5);
            let (mid, last) = tail.split_at(tail.len().min(4));
            let last = &last[..last.len().min(4)];
            formatted.push(' ');
            formatted.push_str(first);
            if !mid.is_empty() {
                formatted.push('-');
                formatted.push_str(mid);
            }
            if !last.is_empty() {
                formatted.push('-');
                formatted.push_str(last);
            }
        }
    }

    formatted
}

/// WhatsApp only works with mobiles, so landlines (8 subscriber digits) are
/// refused here even though [`to_e164`] would take them.
pub fn is_valid_mobile(input: &str) -> bool {
    let digits = only_digits(input);
    let Some(rest) = digits.strip_prefix(COUNTRY_CODE) else {
        return false;
    };
    let (ddd, local) = rest.split_at(rest.len().min(2));

    if ddd.len() != 2 || ddd.starts_with('0') {
        return false;
    }

    local.len() == 9 && local.starts_with('9')
}

pub fn to_e164(input: &str) -> Option<String> {
    let digits = only_digits(input);
    let local = digits.strip_prefix(COUNTRY_CODE)?;
    match local.len() {
        10 | 11 => Some(format!("+{}", digits)),
        _ => None,
    }
}

pub fn ensure_prefix(value: &str) -> String {
    if value.is_empty() || !value.starts_with(DISPLAY_PREFIX) {
        EMPTY_FIELD.to_string()
    } else {
        value.to_string()
    }
}

/// True when a keydown would eat into the "+55" prefix.
pub fn blocks_prefix_edit(key: &str, caret: u32) -> bool {
    let prefix_len = DISPLAY_PREFIX.len() as u32;
    match key {
        "Backspace" => caret <= prefix_len,
        "Delete" => caret < prefix_len + 1,
        _ => false,
    }
}

/// Field value after an input event, and whether it is submittable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedField {
    pub value: String,
    pub valid: bool,
}

pub fn mask_field(raw: &str) -> MaskedField {
    let value = format_brazil_phone(raw);
    let valid = is_valid_mobile(&value);
    MaskedField { value, valid }
}

/// New field value on focus, when the prefix has to be put back.
pub fn focus_field(value: &str) -> Option<String> {
    let fixed = ensure_prefix(value);
    (fixed != value).then_some(fixed)
}

/// New field value when a keydown is swallowed; `None` lets the key through.
pub fn guard_keydown(key: &str, caret: u32, value: &str) -> Option<String> {
    blocks_prefix_edit(key, caret).then(|| ensure_prefix(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_digits_drops_everything_else() {
        assert_eq!(only_digits("+55 (11) 98888-7777"), "5511988887777");
        assert_eq!(only_digits(""), "");
        assert_eq!(only_digits("abc"), "");
    }

    #[test]
    fn formats_progressively_while_typing() {
        assert_eq!(format_brazil_phone(""), "+55");
        assert_eq!(format_brazil_phone("+55 1"), "+55 (1");
        assert_eq!(format_brazil_phone("+55 11"), "+55 (11)");
        assert_eq!(format_brazil_phone("+55 (11) 9"), "+55 (11) 9");
        assert_eq!(format_brazil_phone("+55 (11) 98888"), "+55 (11) 98888");
        assert_eq!(format_brazil_phone("+55 (11) 988887"), "+55 (11) 98-8887");
        assert_eq!(format_brazil_phone("+55 (11) 98888777"), "+55 (11) 9888-8777");
        assert_eq!(
            format_brazil_phone("+55 (11) 988887777"),
            "+55 (11) 98888-7777"
        );
    }

    #[test]
    fn synthesizes_country_code_from_area_code() {
        assert_eq!(format_brazil_phone("11988887777"), "+55 (11) 98888-7777");
        assert_eq!(format_brazil_phone("4"), "+55 (4");
    }

    #[test]
    fn truncates_extra_digits() {
        assert_eq!(
            format_brazil_phone("55119888877779999"),
            "+55 (11) 98888-7777"
        );
    }

    #[test]
    fn formatted_output_keeps_every_digit_in_order() {
        let source = "55987654321098";
        for len in 2..=13 {
            for shift in 0..10u8 {
                let tail: String = source[2..len]
                    .bytes()
                    .map(|b| (b'0' + (b - b'0' + shift) % 10) as char)
                    .collect();
                let digits = format!("55{}", tail);
                let formatted = format_brazil_phone(&digits);
                assert!(formatted.starts_with("+55"), "{}", formatted);
                assert_eq!(only_digits(&formatted), digits);
            }
        }
    }

    #[test]
    fn formatting_is_idempotent() {
        let inputs = [
            "",
            "5",
            "55",
            "+55 (0",
            "1",
            "119",
            "(21) 3333-4444",
            "5511988887777",
            "00000000000000000",
            "hello 12 world 345",
            "+1 415 555 0100",
        ];
        for input in inputs {
            let once = format_brazil_phone(input);
            assert_eq!(format_brazil_phone(&once), once, "input {:?}", input);
        }
    }

    #[test]
    fn accepts_only_mobile_numbers() {
        assert!(is_valid_mobile("5511988887777"));
        assert!(is_valid_mobile("+55 (11) 98888-7777"));
        assert!(!is_valid_mobile("5511888887777"));
        assert!(!is_valid_mobile("551188887777"));
        assert!(!is_valid_mobile("5501988887777"));
        assert!(!is_valid_mobile("5411988887777"));
        assert!(!is_valid_mobile("55119888877770"));
        assert!(!is_valid_mobile("+55 (11)"));
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn e164_takes_ten_or_eleven_local_digits() {
        assert_eq!(
            to_e164("5511988887777").as_deref(),
            Some("+5511988887777")
        );
        // Wider than the mobile check on purpose.
        assert_eq!(to_e164("551198888777").as_deref(), Some("+551198888777"));
        assert!(!is_valid_mobile("551198888777"));
        assert_eq!(to_e164("+55 (11) 98888-7777").as_deref(), Some("+5511988887777"));
        assert_eq!(to_e164("11988887777"), None);
        assert_eq!(to_e164("55119888"), None);
        assert_eq!(to_e164("551198888777712"), None);
    }

    #[test]
    fn prefix_is_restored_when_missing() {
        assert_eq!(ensure_prefix(""), "+55 ");
        assert_eq!(ensure_prefix("11 9"), "+55 ");
        assert_eq!(ensure_prefix("+5"), "+55 ");
        assert_eq!(ensure_prefix("+55 (11)"), "+55 (11)");
    }

    #[test]
    fn prefix_edits_are_blocked() {
        assert!(blocks_prefix_edit("Backspace", 3));
        assert!(blocks_prefix_edit("Backspace", 0));
        assert!(!blocks_prefix_edit("Backspace", 4));
        assert!(blocks_prefix_edit("Delete", 3));
        assert!(!blocks_prefix_edit("Delete", 4));
        assert!(!blocks_prefix_edit("a", 0));
    }

    #[test]
    fn typing_masks_and_gates_together() {
        let partial = mask_field("+55 (11) 98888");
        assert_eq!(partial.value, "+55 (11) 98888");
        assert!(!partial.valid);

        let full = mask_field("+55 (11) 988887777");
        assert_eq!(full.value, "+55 (11) 98888-7777");
        assert!(full.valid);

        // Pasted without country code.
        let pasted = mask_field("(21) 99999-0000");
        assert_eq!(pasted.value, "+55 (21) 99999-0000");
        assert!(pasted.valid);

        let landline = mask_field("11 3333 4444");
        assert_eq!(landline.value, "+55 (11) 3333-4444");
        assert!(!landline.valid);

        let empty = mask_field("");
        assert_eq!(empty.value, "+55");
        assert!(!empty.valid);
    }

    #[test]
    fn focus_restores_only_a_missing_prefix() {
        assert_eq!(focus_field("").as_deref(), Some("+55 "));
        assert_eq!(focus_field("(11) 9").as_deref(), Some("+55 "));
        assert_eq!(focus_field("+55 (11) 9"), None);
        assert_eq!(focus_field("+55 "), None);
    }

    #[test]
    fn keydown_into_prefix_keeps_the_field() {
        assert_eq!(
            guard_keydown("Backspace", 2, "+55 (11) 9").as_deref(),
            Some("+55 (11) 9")
        );
        assert_eq!(guard_keydown("Delete", 0, "").as_deref(), Some("+55 "));
        assert_eq!(guard_keydown("Backspace", 10, "+55 (11) 9"), None);
        assert_eq!(guard_keydown("1", 0, "+55 "), None);
    }
}
