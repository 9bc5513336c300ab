//! Every operation is checked against `String` doing the same work, with the
//! model clipped to the fixed capacity afterwards.

use fixed_string::{FixedStr, NPOS};
use pretty_assertions::assert_eq;

const TESTDATA: [&str; 6] = ["", "A", "xx", "123", "XxxxxX", "PAPPPPPPPPP"];

type Small = FixedStr<5>;

fn clipped(mut model: String) -> String {
    model.truncate(Small::MAX_SIZE);
    model
}

fn assert_matches(actual: &Small, model: &str) {
    assert_eq!(actual.len(), model.len());
    assert_eq!(actual.to_str(), Ok(model));
    assert_eq!(actual.as_units_with_nul().last(), Some(&0));
}

fn position(found: Option<usize>) -> usize {
    found.unwrap_or(NPOS)
}

#[test]
fn construction() {
    for item in TESTDATA {
        let model = clipped(item.to_owned());

        assert_matches(&Small::from(item), &model);
        assert_matches(&Small::from_units(item), &model);

        let mut assigned = Small::new();
        assigned.assign(item);
        assert_matches(&assigned, &model);

        let owned = item.to_owned();
        assert_matches(&Small::from_units(owned.as_bytes()), &model);

        let wider = FixedStr::<10>::from(item);
        assert_matches(&Small::from(&wider), &clipped(wider.to_str().unwrap().to_owned()));
        assert_matches(&Small::from_nul_terminated(wider.as_units_with_nul()), &model);
    }
}

#[test]
fn unit_search() {
    for item in TESTDATA {
        let s = Small::from(item);
        let model = clipped(item.to_owned());

        assert_eq!(s.find(b'A', 0), position(model.find('A')));
        assert_eq!(s.find(b'x', 0), position(model.find('x')));
        assert_eq!(s.rfind(b'x', NPOS), position(model.rfind('x')));
        assert_eq!(s.rfind(b'x', s.len()), position(model.rfind('x')));
    }
}

#[test]
fn substring_search() {
    for item in TESTDATA {
        let s = Small::from(item);
        let model = clipped(item.to_owned());

        assert_eq!(s.find("xx", 0), position(model.find("xx")));
        assert_eq!(s.rfind("xx", s.len()), position(model.rfind("xx")));
    }
}

#[test]
fn append() {
    for first in TESTDATA {
        for second in TESTDATA {
            let model = clipped(format!("{first}{second}"));

            let mut s = Small::from(first);
            s += second;
            assert_matches(&s, &model);

            let mut s = Small::from(first);
            s.append(second);
            assert_matches(&s, &model);

            let mut s = Small::from(first);
            s.extend(second.bytes());
            assert_matches(&s, &model);
        }
    }
}

#[test]
fn insert_at_both_ends() {
    for first in TESTDATA {
        for second in TESTDATA {
            let mut s = Small::from(first);
            let mut model = clipped(first.to_owned());
            s.insert(0, second);
            model.insert_str(0, second);
            assert_matches(&s, &clipped(model));

            let mut s = Small::from(first);
            let mut model = clipped(first.to_owned());
            let end = s.len();
            s.insert(end, second);
            model.push_str(second);
            assert_matches(&s, &clipped(model));
        }
    }
}

#[test]
fn replace_everywhere() {
    for first in TESTDATA {
        for second in TESTDATA {
            let base = Small::from(first);
            let base_model = clipped(first.to_owned());
            for index in 0..=base.len() {
                for count in 0..=base.len() - index {
                    let mut s = base;
                    s.replace(index, count, second);

                    let mut model = base_model.clone();
                    model.replace_range(index..index + count, second);
                    assert_matches(&s, &clipped(model));
                }
            }
        }
    }
}

#[test]
fn erase_everywhere() {
    for item in TESTDATA {
        let base = Small::from(item);
        let base_model = clipped(item.to_owned());
        for index in 0..=base.len() {
            for count in 0..=base.len() - index + 1 {
                let mut s = base;
                s.erase(index, count);

                let mut model = base_model.clone();
                model.replace_range(index..(index + count).min(base_model.len()), "");
                assert_matches(&s, &model);
            }
        }
    }
}
