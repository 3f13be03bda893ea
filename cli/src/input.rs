//! Collecting bill inputs from flags and stdin prompts

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use power_bill::{BillingError, CustomerCategory, MeterReadings};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Not a valid meter reading: {0:?}")]
    InvalidReading(String),

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error("Cannot render bill: {0}")]
    Render(#[from] serde_json::Error),
}

impl InputError {
    /// Text shown to the person at the terminal.
    pub fn user_message(&self) -> String {
        match self {
            Self::Billing(BillingError::InvalidCategory(_)) => {
                "Invalid customer type! Please enter Domestic, Commercial, or Industrial."
                    .to_string()
            }
            Self::Billing(BillingError::InvalidReadingOrder { .. }) => {
                "Error: Current reading cannot be less than previous reading".to_string()
            }
            Self::InvalidReading(_) => {
                "Error: Please enter valid numeric values for meter readings".to_string()
            }
            Self::Billing(BillingError::AmountOverflow { .. }) => {
                "Error: Meter readings are too large to bill".to_string()
            }
            other => format!("Error: {}", other),
        }
    }
}

/// Values supplied on the command line; `None` means ask for it.
#[derive(Debug, Clone, Default)]
pub struct BillRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub previous: Option<String>,
    pub current: Option<String>,
}

/// Validated inputs, ready for the calculator
#[derive(Debug, Clone, PartialEq)]
pub struct BillInput {
    pub name: String,
    pub category: CustomerCategory,
    pub readings: MeterReadings,
}

/// Line-oriented prompt/response over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line, trimmed. End of input reads as "".
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn value_or_ask(&mut self, given: Option<String>, prompt: &str) -> io::Result<String> {
        match given {
            Some(value) => Ok(value.trim().to_string()),
            None => self.ask(prompt),
        }
    }
}

/// Gather name, category and readings, prompting for anything not given.
///
/// The category is checked as soon as it is known, before any reading is
/// asked for.
pub fn collect<R: BufRead, W: Write>(
    request: BillRequest,
    prompter: &mut Prompter<R, W>,
) -> Result<BillInput, InputError> {
    let name = prompter.value_or_ask(request.name, "Enter Customer Name: ")?;

    let category = prompter.value_or_ask(
        request.category,
        "Enter Customer Type (Domestic/Commercial/Industrial): ",
    )?;
    let category = CustomerCategory::from_str(&category)?;

    let previous = prompter.value_or_ask(request.previous, "Enter Previous Reading: ")?;
    let current = prompter.value_or_ask(request.current, "Enter Current Reading: ")?;
    let previous = parse_reading(&previous)?;
    let current = parse_reading(&current)?;

    let readings = MeterReadings::new(previous, current)?;
    Ok(BillInput {
        name,
        category,
        readings,
    })
}

/// A non-negative decimal number.
pub fn parse_reading(text: &str) -> Result<Decimal, InputError> {
    let trimmed = text.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| InputError::InvalidReading(trimmed.to_string()))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(InputError::InvalidReading(trimmed.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(request: BillRequest, stdin: &str) -> (Result<BillInput, InputError>, String) {
        let mut out = Vec::new();
        let result = {
            let mut prompter = Prompter::new(Cursor::new(stdin.as_bytes()), &mut out);
            collect(request, &mut prompter)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prompts_for_everything_in_order() {
        let (result, shown) = run(BillRequest::default(), "Asha\nDomestic\n100\n150\n");
        let input = result.unwrap();

        assert_eq!(input.name, "Asha");
        assert_eq!(input.category, CustomerCategory::Domestic);
        assert_eq!(input.readings.consumption(), Decimal::from(50));
        assert_eq!(
            shown,
            "Enter Customer Name: \
             Enter Customer Type (Domestic/Commercial/Industrial): \
             Enter Previous Reading: \
             Enter Current Reading: "
        );
    }

    #[test]
    fn flags_skip_prompts() {
        let request = BillRequest {
            name: Some("Ravi".into()),
            category: Some(" COMMERCIAL ".into()),
            previous: Some("0".into()),
            current: None,
        };
        let (result, shown) = run(request, "250\n");

        assert_eq!(result.unwrap().category, CustomerCategory::Commercial);
        assert_eq!(shown, "Enter Current Reading: ");
    }

    #[test]
    fn bad_category_stops_before_readings() {
        let (result, shown) = run(BillRequest::default(), "Asha\nresidential\n100\n150\n");

        let err = result.unwrap_err();
        assert!(matches!(err, InputError::Billing(BillingError::InvalidCategory(_))));
        assert!(!shown.contains("Reading"));
        assert_eq!(
            err.user_message(),
            "Invalid customer type! Please enter Domestic, Commercial, or Industrial."
        );
    }

    #[test]
    fn non_numeric_reading_is_rejected() {
        let (result, _) = run(BillRequest::default(), "Asha\ndomestic\nabc\n150\n");
        let err = result.unwrap_err();
        assert!(matches!(err, InputError::InvalidReading(_)));
        assert_eq!(
            err.user_message(),
            "Error: Please enter valid numeric values for meter readings"
        );
    }

    #[test]
    fn inverted_readings_are_rejected() {
        let (result, _) = run(BillRequest::default(), "Asha\ndomestic\n150\n100\n");
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            InputError::Billing(BillingError::InvalidReadingOrder { .. })
        ));
        assert_eq!(
            err.user_message(),
            "Error: Current reading cannot be less than previous reading"
        );
    }

    #[test]
    fn overflow_has_its_own_message() {
        let err = InputError::from(BillingError::AmountOverflow {
            consumption: Decimal::MAX,
        });
        assert_eq!(
            err.user_message(),
            "Error: Meter readings are too large to bill"
        );
    }

    #[test]
    fn closed_stdin_reads_as_empty() {
        let (result, _) = run(BillRequest::default(), "");
        assert!(matches!(
            result.unwrap_err(),
            InputError::Billing(BillingError::InvalidCategory(_))
        ));
    }

    #[test]
    fn parse_reading_accepts_decimals() {
        assert_eq!(parse_reading(" 123.45 ").unwrap(), Decimal::new(12345, 2));
        assert_eq!(parse_reading("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_reading("1e2").unwrap(), Decimal::from(100));
    }

    #[test]
    fn parse_reading_rejects_negative_and_garbage() {
        assert!(parse_reading("-5").is_err());
        assert!(parse_reading("").is_err());
        assert!(parse_reading("12a").is_err());
    }
}
