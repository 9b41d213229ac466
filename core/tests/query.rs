// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use unitconv_core::{one_line, Catalog};

thread_local! {
    static CATALOG: Catalog = Catalog::new();
}

fn test(input: &str, output: &str) {
    CATALOG.with(|catalog| {
        let res = match one_line(catalog, input) {
            Ok(v) => v,
            Err(v) => v,
        };
        similar_asserts::assert_eq!(res, output);
    });
}

#[test]
fn test_length() {
    test("5 km to miles", "5.0 kilometers is 3.106844378165098 miles");
    test("1 km to m", "1.0 kilometer is 1000.0 meters");
    test("2.5 mi to km", "2.5 miles is 4.023375 kilometers");
    test("3 yd to ft", "3.0 yards is 8.999999999999998 feet");
}

#[test]
fn test_weight() {
    test("0.5 kg to g", "0.5 kilograms is 500.0 grams");
    test("16 oz to lb", "16.0 ounces is 1.0 pound");
    test("2.2 kg to pounds", "2.2 kilograms is 4.850173724404311 pounds");
}

#[test]
fn test_identity() {
    test("1 m to m", "1.0 meter is 1.0 meter");
    test("10 c to c", "10.0 degrees Celsius is 10.0 degrees Celsius");
}

#[test]
fn test_temperature() {
    test("10 c to f", "10.0 degrees Celsius is 50.0 degrees Fahrenheit");
    test("1 c to f", "1.0 degree Celsius is 33.8 degrees Fahrenheit");
    test(
        "100 f to c",
        "100.0 degrees Fahrenheit is 37.77777777777778 degrees Celsius",
    );
    test("100 c to k", "100.0 degrees Celsius is 373.15 kelvins");
    test("1 k to c", "1.0 kelvin is -272.15 degrees Celsius");
    test("32 f to k", "32.0 degrees Fahrenheit is 273.15 kelvins");
    test("300 k to f", "300.0 kelvins is 80.32999999999998 degrees Fahrenheit");
    test(
        "-40 f to c",
        "-40.0 degrees Fahrenheit is -40.0 degrees Celsius",
    );
}

#[test]
fn test_multi_word_phrases() {
    test("2 degrees Celsius to k", "2.0 degrees Celsius is 275.15 kelvins");
    test(
        "1 degree Fahrenheit in celsius",
        "1.0 degree Fahrenheit is -17.22222222222222 degrees Celsius",
    );
}

#[test]
fn test_aliases_are_case_insensitive() {
    test("1 KM to M", "1.0 kilometer is 1000.0 meters");
    test("10 DC to DF", "10.0 degrees Celsius is 50.0 degrees Fahrenheit");
}

#[test]
fn test_negative_quantities() {
    test("-5 kg to g", "Weight shouldn't be negative.");
    test("-5 m to km", "Length shouldn't be negative.");
}

#[test]
fn test_unknown_units() {
    test("5 banana to km", "Conversion from ??? to kilometers is impossible");
    test("5 km to banana", "Conversion from kilometers to ??? is impossible");
    test("5 foo to bar", "Conversion from ??? to ??? is impossible");
}

#[test]
fn test_kind_mismatch() {
    test("5 km to kg", "Conversion from kilometers to kilograms is impossible");
    test("5 g to c", "Conversion from grams to degrees Celsius is impossible");
}

#[test]
fn test_parse_errors() {
    test("abc", "Parse error");
    test("five km to mi", "Parse error");
    test("5 km to", "Parse error");
    test("km to miles", "Parse error");
    // `in` doubles as the separator, so the inch abbreviation can't
    // appear on the left-hand side.
    test("5 in to cm", "Parse error");
    // The separator is matched case-sensitively.
    test("5 km TO miles", "Parse error");
}

#[test]
fn test_convert_to_quirk() {
    // The literal substring `convertTo` wins over everything else,
    // even inside an otherwise valid query.
    test("5 km convertTo miles", "Conversion from ??? to ??? is impossible");
    test("1 convertto 2", "Conversion from ??? to ??? is impossible");
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    test("  5 km to miles  ", "5.0 kilometers is 3.106844378165098 miles");
}
