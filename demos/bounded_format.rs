use core::fmt::Write as _;
use fixed_string::{FixedStr, fixed_format};

fn main() {
    let mut field = FixedStr::<12>::new();

    for value in [7_u64, 4_096, 1_234_567_890_123] {
        let wanted = fixed_format!(field, "id={value:06}");
        let note = if wanted > field.max_size() { " (truncated)" } else { "" };
        println!("{field} | needed {wanted}{note}");
    }

    field.clear();
    for word in ["append", "until", "full"] {
        if write!(field, "{word} ").is_err() {
            println!("Stopped at {word:?}");
            break;
        }
    }

    let owned = String::from(field);
    println!("As String: {owned:?}");
}
