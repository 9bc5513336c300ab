use core::cmp::Ordering;

use fixed_string::{Cursor, Error, FixedStr, NPOS, WideFixedStr};
use pretty_assertions::assert_eq;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn empty_string_layout() {
    let s = FixedStr::<3>::new();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.max_size(), 2);
    assert_eq!(s, "");
    assert_eq!(size_of::<FixedStr<3>>(), 3);
    assert_eq!(size_of::<WideFixedStr<3>>(), 3 * size_of::<u16>());
}

#[test]
fn construction_truncates_to_max_size() {
    assert_eq!(FixedStr::<3>::from("12"), "12");
    assert_eq!(FixedStr::<3>::from("1234"), "12");
    assert_eq!(FixedStr::<3>::from([b'1', b'2', b'3']), "12");
    assert_eq!(FixedStr::<3>::from([0_u8; 0]), "");

    let mut s = FixedStr::<3>::new();
    s.assign(&[b'1', b'2']);
    assert_eq!(s, "12");
    s.assign(&[b'1', b'2', b'3']);
    assert_eq!(s, "12");
}

#[test]
fn assignment_tracks_length() {
    let mut s = FixedStr::<3>::new();
    s.assign("1");
    assert!(!s.is_empty());
    assert_eq!(s.len(), 1);

    s.assign("1234");
    assert_eq!(s.len(), 2);

    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);

    let mut t = FixedStr::<4>::new();
    assert_eq!(t.as_units_with_nul(), b"\0");
    t.assign("12");
    assert_eq!(t.as_c_str(), Ok(c"12"));
    t.assign("1234");
    assert_eq!(t.len(), 3);
    assert_eq!(t.as_c_str(), Ok(c"123"));
}

#[test]
fn repeat_and_positional_assignment() {
    let mut s = FixedStr::<5>::new();
    s.assign_repeat(3, b'A');
    assert_eq!(s, "AAA");
    s.assign_repeat(4, b'A');
    assert_eq!(s, "AAAA");
    s.assign_repeat(10, b'A');
    assert_eq!(s, "AAAA");

    s.assign(&b"1234"[..2]);
    assert_eq!(s, "12");
    s.assign_at("1234", 2, 1).unwrap();
    assert_eq!(s, "3");
    assert_eq!(
        s.assign_at("1234", 5, 1).map(|s| s.len()),
        Err(Error::OutOfRange { op: "assign_at", pos: 5, limit: 4 }),
    );
}

#[test]
fn single_units_and_lists() {
    let mut s = FixedStr::<3>::new();
    s.assign(&[0_u8; 0]);
    assert_eq!(s, "");
    s.assign(&[b'A', b'B']);
    assert_eq!(s, "AB");
    s.assign(&[b'A', b'B', b'C']);
    assert_eq!(s, "AB");

    s.clear();
    s += b'A';
    assert_eq!(s, "A");
    s += &[b'B', b'C'];
    assert_eq!(s, "AB");

    s.clear();
    s.append("A");
    assert_eq!(s, "A");
    s.append(b'A');
    assert_eq!(s, "AA");
    s.pop_back();
    assert_eq!(s, "A");
    s.append(&[b'B']);
    assert_eq!(s, "AB");
}

#[test]
fn compare_against_every_operand_kind() {
    let s = FixedStr::<6>::from("test1");

    assert_eq!(s.compare("test1"), Ordering::Equal);
    assert_eq!(s.compare("test2"), Ordering::Less);
    assert_eq!(s.compare("test0"), Ordering::Greater);
    assert_eq!(s.compare("test11"), Ordering::Less);

    assert!(s == "test1");
    assert!(s < "test2");
    assert!(s > "test0");
    assert!(s <= "test2");
    assert!(s >= "test0");
    assert!(s != "test2");
    assert!(s != "test11");

    assert_eq!(s.compare(&FixedStr::<8>::from("test1")), Ordering::Equal);
    assert_eq!(s.compare(&FixedStr::<8>::from("test2")), Ordering::Less);
    assert_eq!(s.compare(&FixedStr::<8>::from("test0")), Ordering::Greater);
    assert_eq!(s.compare(&FixedStr::<8>::from("test11")), Ordering::Less);

    assert!(s == FixedStr::<8>::from("test1"));
    assert!(s < FixedStr::<8>::from("test2"));
    assert!(s > FixedStr::<8>::from("test0"));
    assert!(s <= FixedStr::<8>::from("test2"));
    assert!(s >= FixedStr::<8>::from("test0"));
    assert!(s != FixedStr::<8>::from("test11"));

    assert!(&b"test2"[..] > s);
    assert!("test0" < s);
}

#[test]
fn forward_search() {
    let s = FixedStr::<8>::from("ABABAC");
    assert_eq!(s.find(b'A', 0), 0);
    assert_eq!(s.find("A", 0), 0);
    assert_eq!(s.find(b'A', 1), 2);
    assert_eq!(s.find("A", 1), 2);
    assert_eq!(s.find("AB", 0), 0);
    assert_eq!(s.find("AB", 1), 2);
}

#[test]
fn reverse_search() {
    let s = FixedStr::<8>::from("ABABAC");
    assert_eq!(s.rfind(b'A', NPOS), 4);
    assert_eq!(s.rfind("A", NPOS), 4);
    assert_eq!(s.rfind(b'A', 1), 0);
    assert_eq!(s.rfind("A", 1), 0);
    assert_eq!(s.rfind("AB", 4), 2);
    assert_eq!(s.rfind("AB", 3), 2);
    assert_eq!(s.rfind("C", 0), NPOS);
    assert_eq!(s.rfind("C", NPOS), 5);
}

#[test]
fn unit_set_search() {
    let s = FixedStr::<8>::from("ABCEAG");

    assert_eq!(s.find_first_of(b'E', 0), 3);
    assert_eq!(s.find_first_of(b'E', 4), NPOS);
    assert_eq!(s.find_first_of("ECF", 0), 2);
    assert_eq!(s.find_first_of("ECF", 3), 3);
    assert_eq!(s.find_first_of(b'A', 1), 4);
    assert_eq!(s.find_first_of("ECF", 1), 2);

    assert_eq!(s.find_first_not_of("ABC", 0), 3);
    assert_eq!(s.find_first_not_of(b'E', 3), 4);
    assert_eq!(s.find_first_not_of("AEC", 2), 5);
    assert_eq!(s.find_first_not_of(b'B', 1), 2);
    assert_eq!(s.find_first_not_of("ABCEAG", 0), NPOS);

    assert_eq!(s.find_last_not_of("ABC", NPOS), 5);
    assert_eq!(s.find_last_not_of(b'E', 3), 2);
    assert_eq!(s.find_last_not_of("AEC", 3), 1);
    assert_eq!(s.find_last_not_of(b'B', 1), 0);
    assert_eq!(s.find_last_not_of("ABCEAG", NPOS), NPOS);
}

#[test]
fn erase_by_count_and_cursor() {
    let mut s = FixedStr::<8>::from("ABCEAG");
    assert_eq!(*s.erase(1, 3), "AAG");
    assert_eq!(s, "AAG");
    s += "GGGG";
    assert_eq!(s, "AAGGGGG");
    s.erase_at(s.begin() + 2);
    assert_eq!(s, "AAGGGG");
    s.erase_range(s.begin() + 1, s.begin() + 2);
    assert_eq!(s, "AGGGG");
}

#[test]
fn forward_and_reverse_iteration() {
    let s = FixedStr::<4>::from("ABC");
    let mut seen = Vec::new();
    for &unit in &s {
        seen.push(unit);
    }
    assert_eq!(seen, b"ABC");

    seen.clear();
    let mut cur = s.rbegin();
    while cur != s.rend() {
        seen.push(*cur.get(&s));
        cur += 1;
    }
    assert_eq!(seen, b"CBA");
}

#[test]
fn mutable_cursor_widens_to_read_only() {
    let mut s = FixedStr::<8>::from("BA");
    let cur = s.begin_mut();
    let read_only: Cursor = cur.into();
    assert_eq!(read_only, s.begin());
    assert_eq!(*read_only.get(&s), b'B');
}

#[test]
fn insert_sequence() {
    let mut s = FixedStr::<8>::from("ABC");
    s.insert_at(s.begin(), "D");
    assert_eq!(s, "DABC");
    s.insert_at(s.end(), "D");
    assert_eq!(s, "DABCD");
    s.insert_at(s.begin() + 1, "ABCDE");
    assert_eq!(s, "DABCDEA");

    s.clear();
    s.insert_at(s.end(), "AB");
    s.insert_at(s.begin() + 1, "AB");
    assert_eq!(s, "AABB");
    s.insert_at(s.end(), "ABCDEFG");
    assert_eq!(s, "AABBABC");

    s.clear();
    s.insert(0, "ABC");
    assert_eq!(s, "ABC");
    s.insert(3, "abc");
    assert_eq!(s, "ABCabc");
    s.insert(5, "123");
    assert_eq!(s, "ABCab12");
    s.insert_repeat(3, 3, b'X');
    assert_eq!(s, "ABCXXXa");
    s.insert_repeat(3, 5, b'Y');
    assert_eq!(s, "ABCYYYY");
}

#[test]
fn replace_sequence() {
    let mut s = FixedStr::<4>::from("ABC");
    s.replace(0, 1, "Z");
    assert_eq!(s, "ZBC");
    s.replace(0, 1, "xx");
    assert_eq!(s, "xxB");
    s.assign("ABC");
    s.replace(2, 2, "A");
    assert_eq!(s, "ABA");
    s.replace(1, 3, "");
    assert_eq!(s, "A");
}

#[test]
fn wide_units_follow_the_same_rules() {
    let mut s = WideFixedStr::<8>::from("ABABAC");
    assert_eq!(s.rfind(&utf16("AB")[..], 4), 2);
    assert_eq!(s.find_first_not_of(&utf16("AB")[..], 0), 5);

    s.replace(0, 2, &utf16("\u{e9}\u{e8}\u{ea}")[..]);
    assert_eq!(s.as_units(), &utf16("\u{e9}\u{e8}\u{ea}ABAC")[..]);
    assert_eq!(s.to_string(), "\u{e9}\u{e8}\u{ea}ABAC");

    s.insert(0, &utf16("xyz")[..]);
    assert_eq!(s.len(), s.max_size());
    assert_eq!(s.to_string(), "xyz\u{e9}\u{e8}\u{ea}A");

    let narrow_cmp = WideFixedStr::<4>::from("xyz");
    assert_eq!(s.compare(&narrow_cmp), Ordering::Greater);
}
