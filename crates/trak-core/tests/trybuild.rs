//! Derive and operator shapes that must keep compiling.
//!
//! Rejected programs are covered by the `compile_fail` doctests in
//! `shared_enum` and `shared_bitfield`.

#[test]
fn derive_and_operators_compile() {
    let cases = trybuild::TestCases::new();
    cases.pass("tests/trybuild/*.rs");
}
