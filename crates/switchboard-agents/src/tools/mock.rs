//! The canned tool implementations. No latency here; see `ToolRegistry`.

use super::Operation;

/// Soft-failure result for a zero divisor.
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero.";

/// Perform the arithmetic and describe the result.
pub fn calculate(a: f64, b: f64, op: Operation) -> String {
    let result = match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return DIVISION_BY_ZERO.to_string();
            }
            a / b
        }
    };
    format!("The result is {}", format_number(result))
}

pub fn web_search(query: &str) -> String {
    format!(
        "Mock search results for '{query}': The topic is complex, with many perspectives. \
         Key findings suggest a correlation but no definitive causation."
    )
}

/// Local wall-clock time, ISO-8601 with microseconds.
pub fn current_time() -> String {
    let now = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f");
    format!("The current time is {now}")
}

// Python-style float text: exponent form below 1e-4 or from 1e16 up,
// otherwise plain decimal, with whole numbers keeping one place ("9.0").
fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{value:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if value != 0.0 && !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
