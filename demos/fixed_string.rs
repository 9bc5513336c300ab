use fixed_string::{FixedStr, NPOS};

fn main() {
    let mut s = FixedStr::<16>::from("Hello, ");
    s.append("world!");

    println!("String: {}", s);
    println!("Length: {} of {}", s.len(), s.max_size());

    // Overflow truncates instead of failing
    s.append(" This part does not fit.");
    println!("Truncated: {:?}", s);

    s.replace(0, 5, "Howdy");
    s.insert(s.find(b',', 0), "!");
    println!("Edited: {}", s);

    let comma = s.find_first_of(",!", 0);
    if comma != NPOS {
        s.erase_from(comma);
    }
    println!("Greeting: {}", s);

    // Pop units
    while let Some(unit) = s.pop_back() {
        println!("Popped: {}", char::from(unit));
    }
}
