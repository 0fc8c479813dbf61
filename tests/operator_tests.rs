#![cfg(feature = "operator")]
//! Integration tests for the unary operator adapters.

use fnkit::operator::{
    add1, bit_and1, bit_or1, bit_xor1, contains1, count_of1, cube, div1, eq1, even, ge1, getitem1, gt1,
    index_of1, le1, lt1, mul1, ne1, odd, pow1, rem1, shl1, shr1, split1, splitn1, square, sub1,
};
use rstest::rstest;

// =============================================================================
// Arithmetic
// =============================================================================

#[rstest]
#[case(0, 1)]
#[case(41, 42)]
#[case(-1, 0)]
fn test_add1(#[case] input: i32, #[case] expected: i32) {
    assert_eq!(add1(1)(input), expected);
}

#[rstest]
fn test_arithmetic_keeps_right_operand_fixed() {
    assert_eq!(sub1(3)(10), 7);
    assert_eq!(mul1(3)(10), 30);
    assert_eq!(div1(3)(10), 3);
    assert_eq!(rem1(3)(10), 1);
}

#[rstest]
fn test_operators_on_references() {
    let values = [1, 2, 3];
    let doubled: Vec<i32> = values.iter().map(mul1(2)).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[rstest]
fn test_float_arithmetic() {
    let halves: Vec<f64> = [1.0, 3.0].into_iter().map(div1(2.0)).collect();
    assert_eq!(halves, vec![0.5, 1.5]);
}

#[rstest]
#[case(2, 0, 1)]
#[case(2, 10, 1024)]
#[case(-3, 3, -27)]
fn test_pow1_on_integers(#[case] base: i64, #[case] exponent: u32, #[case] expected: i64) {
    assert_eq!(pow1(exponent)(base), expected);
}

#[rstest]
fn test_pow1_maps_over_a_range() {
    let squares: Vec<u32> = (1..=5_u32).map(pow1(2)).collect();
    assert_eq!(squares, vec![1, 4, 9, 16, 25]);
    assert_eq!(squares, (1..=5_u32).map(square).collect::<Vec<_>>());
}

#[rstest]
fn test_cube_of_float() {
    assert!((cube(1.5_f64) - 3.375).abs() < f64::EPSILON);
}

// =============================================================================
// Bitwise
// =============================================================================

#[rstest]
fn test_bitwise_adapters() {
    assert_eq!(bit_and1(0b1100_u8)(0b1010_u8), 0b1000);
    assert_eq!(bit_or1(0b1100_u8)(0b1010_u8), 0b1110);
    assert_eq!(bit_xor1(0b1100_u8)(0b1010_u8), 0b0110);
    assert_eq!(shl1(2_u32)(1_u8), 4);
    assert_eq!(shr1(2_u32)(16_u8), 4);
}

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
fn test_comparison_predicates() {
    assert!(lt1(5)(&4));
    assert!(!lt1(5)(&5));
    assert!(le1(5)(&5));
    assert!(eq1(5)(&5));
    assert!(ne1(5)(&4));
    assert!(ge1(5)(&5));
    assert!(gt1(5)(&6));
}

#[rstest]
fn test_predicates_plug_into_iterator_adapters() {
    let prefix: Vec<i32> = (0..).take_while(lt1(4)).collect();
    assert_eq!(prefix, vec![0, 1, 2, 3]);

    let threshold = String::from("m");
    let late: Vec<String> = ["apple", "pear", "zucchini"]
        .into_iter()
        .map(String::from)
        .filter(ge1(threshold))
        .collect();
    assert_eq!(late, vec!["pear", "zucchini"]);
}

#[rstest]
fn test_parity() {
    assert_eq!((0_u8..6).filter(even).count(), 3);
    assert_eq!((-5_i64..5).filter(odd).count(), 5);
}

// =============================================================================
// Sequences
// =============================================================================

#[rstest]
fn test_sequence_adapters_on_vectors() {
    let rows = vec![vec![1, 2, 2], vec![3], vec![]];

    let with_two: Vec<bool> = rows.iter().map(|row| contains1(2)(row)).collect();
    let twos: Vec<usize> = rows.iter().map(|row| count_of1(2)(row)).collect();
    let positions: Vec<Option<usize>> = rows.iter().map(|row| index_of1(2)(row)).collect();
    let heads: Vec<Option<i32>> = rows.iter().map(|row| getitem1(0)(row)).collect();

    assert_eq!(with_two, vec![true, false, false]);
    assert_eq!(twos, vec![2, 0, 0]);
    assert_eq!(positions, vec![Some(1), None, None]);
    assert_eq!(heads, vec![Some(1), Some(3), None]);
}

#[rstest]
fn test_sequence_adapters_on_slices() {
    let letters: &[char] = &['a', 'b', 'a'];
    assert!(contains1('b')(letters));
    assert_eq!(count_of1('a')(letters), 2);
    assert_eq!(index_of1('z')(letters), None);
    assert_eq!(getitem1(2)(letters), Some('a'));
}

#[rstest]
fn test_split_adapters_parse_rows() {
    let rows = ["1.4 2.5 5.6", "2.4 7.5"];
    let fields: Vec<usize> = rows.into_iter().map(|row| split1(" ")(row).len()).collect();
    let heads: Vec<&str> = rows.into_iter().map(|row| splitn1(2, " ")(row)[0]).collect();

    assert_eq!(fields, vec![3, 2]);
    assert_eq!(heads, vec!["1.4", "2.4"]);
}
