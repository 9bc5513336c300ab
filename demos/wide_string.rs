use fixed_string::{FixedString, WideFixedStr};

fn main() {
    let mut wide = WideFixedStr::<8>::from("w\u{e9}de");
    wide.append(&[0x21_u16, 0x21][..]);

    println!("UTF-16: {} ({} code units)", wide, wide.len());
    println!("Units: {:x?}", wide.as_units());

    for unit in wide.iter().rev() {
        print!("{unit:04x} ");
    }
    println!();

    let chars = FixedString::<char, 4>::from_iter("\u{1d11e}\u{1d11f}\u{1d120}\u{1d121}".chars());
    println!("Chars: {} (max {})", chars, chars.max_size());
}
