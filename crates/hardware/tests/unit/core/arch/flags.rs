//! # Comparison Flag Tests

use ls8_core::core::arch::Flag;
use ls8_core::core::arch::flags::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};
use rstest::rstest;

#[rstest]
#[case(5, 5, Flag::Equal)]
#[case(0, 0, Flag::Equal)]
#[case(255, 255, Flag::Equal)]
#[case(3, 5, Flag::LessThan)]
#[case(0, 255, Flag::LessThan)]
#[case(5, 3, Flag::GreaterThan)]
#[case(255, 0, Flag::GreaterThan)]
fn compare_orders_unsigned(#[case] a: u8, #[case] b: u8, #[case] expected: Flag) {
    assert_eq!(Flag::compare(a, b), expected);
}

#[test]
fn flag_bits_are_single_and_distinct() {
    let bits = [
        Flag::Equal.bits(),
        Flag::LessThan.bits(),
        Flag::GreaterThan.bits(),
    ];
    for b in bits {
        assert_eq!(b.count_ones(), 1);
    }
    assert_eq!(bits, [FLAG_EQUAL, FLAG_LESS, FLAG_GREATER]);
    assert_eq!(FLAG_EQUAL | FLAG_LESS | FLAG_GREATER, 0b111);
}
