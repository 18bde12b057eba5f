//! Participant enums shared by the integration tests

#![allow(dead_code)]

use std::marker::PhantomData;

use trak_core::Participant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
#[repr(u32)]
pub enum A {
    First = 0,
    Second = 1,
    Third = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
#[repr(u32)]
pub enum B {
    First = 0,
    Second = 1,
    Third = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
#[repr(u32)]
pub enum C {
    First = 0,
    Second = 1,
    Third = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
#[repr(u32)]
pub enum D {
    First = 0,
    Second = 1,
    Third = 2,
}

/// Flag set with every bit pattern valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Participant)]
pub struct Flags(pub u32);

pub fn takes_a(value: A) -> u32 {
    value as u32
}

pub fn takes_b(value: B) -> u32 {
    value as u32
}

pub fn takes_c(value: C) -> u32 {
    value as u32
}

/// Compiles only when both arguments have the same type.
pub fn assert_same_type<T>(_: PhantomData<T>, _: PhantomData<T>) {}

pub fn type_of<T>(_: &T) -> PhantomData<T> {
    PhantomData
}
