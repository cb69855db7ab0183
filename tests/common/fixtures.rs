//! Known-good and known-bad inputs.

/// Test card numbers published by payment networks; all pass the Luhn check.
#[allow(dead_code)]
pub const VALID_CARD_NUMBERS: &[&str] = &[
    "4111111111111111",
    "4012888888881881",
    "5555555555554444",
    "5105105105105100",
    "378282246310005",
    "6011111111111117",
    "79927398713",
];

/// Same numbers with the last digit bumped by one.
#[allow(dead_code)]
pub fn corrupted_card_numbers() -> Vec<String> {
    VALID_CARD_NUMBERS
        .iter()
        .map(|number| {
            let (payload, last) = number.split_at(number.len() - 1);
            let bumped = (last.as_bytes()[0] - b'0' + 1) % 10;
            format!("{payload}{bumped}")
        })
        .collect()
}
