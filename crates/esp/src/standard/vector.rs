use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorError};

/// Intended orientation of a vector for future matrix work.
///
/// Every vector starts as a row vector; no arithmetic reads the flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Row,
    Column,
}

/// Right-hand side of a multiplication: either a scalar or another vector.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<'a, T> {
    Scalar(T),
    Vector(&'a Vector<T>),
}

impl<'a, T> From<&'a Vector<T>> for Operand<'a, T> {
    fn from(value: &'a Vector<T>) -> Self {
        Operand::Vector(value)
    }
}

/// A fixed-length, generic vector with elementwise arithmetic.
///
/// The element type only needs the operators used by a given method, so the
/// same type works for integers, floats or any user type implementing
/// `Add`/`Sub`/`Mul`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    elements: Vec<T>,
    #[serde(default)]
    orientation: Orientation,
}

impl<T> Vector<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            elements,
            orientation: Orientation::Row,
        }
    }

    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::new(elements)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Bounds-checked element access.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.elements
            .get(index)
            .ok_or_else(|| out_of_range(index, len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.elements
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))
    }

    /// Replaces the element at `index` in place.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.elements.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// p-norm of the vector. Not computed yet; always fails.
    pub fn norm(&self, p: f64) -> Result<T> {
        log::debug!("norm(p = {}) requested on vector of length {}", p, self.len());
        Err(VectorError::NotImplemented("norm"))
    }
}

fn out_of_range(index: usize, len: usize) -> VectorError {
    log::debug!("Rejected index {} for vector of length {}", index, len);
    VectorError::IndexOutOfRange { index, len }
}

/// Shared kernel for every vector-vector operation, including reflected ones.
fn zip_with<T, F>(op: &'static str, lhs: &[T], rhs: &[T], mut f: F) -> Result<Vector<T>>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    if lhs.len() != rhs.len() {
        log::debug!(
            "Rejected `{}` between lengths {} and {}",
            op,
            lhs.len(),
            rhs.len()
        );
        return Err(VectorError::LengthMismatch {
            left: lhs.len(),
            right: rhs.len(),
        });
    }
    log::trace!("Elementwise `{}` over {} elements", op, lhs.len());
    Ok(lhs
        .iter()
        .zip(rhs.iter())
        .map(|(a, b)| f(a.clone(), b.clone()))
        .collect())
}

impl<T> Vector<T>
where
    T: Clone,
{
    /// Builds a vector of `len` independent copies of `value`.
    pub fn from_elem(value: T, len: usize) -> Self {
        Vector::from_vec(vec![value; len])
    }

    pub fn from_slice(values: &[T]) -> Self {
        Vector::from_vec(values.to_vec())
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_elem(T::zero(), len)
    }
}

impl<T> Vector<T>
where
    T: Clone + One,
{
    pub fn ones(len: usize) -> Self {
        Vector::from_elem(T::one(), len)
    }
}

impl<T> Vector<T>
where
    T: Clone + Add<Output = T>,
{
    /// Elementwise `self[i] + other[i]`.
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        zip_with("add", self.as_slice(), other.as_slice(), |a, b| a + b)
    }

    /// Elementwise `other[i] + self[i]`, for a left operand that is not a vector.
    pub fn reflected_add(&self, other: &[T]) -> Result<Vector<T>> {
        zip_with("add", other, self.as_slice(), |a, b| a + b)
    }
}

impl<T> Vector<T>
where
    T: Clone + Sub<Output = T>,
{
    /// Elementwise `self[i] - other[i]`.
    pub fn subtract(&self, other: &Vector<T>) -> Result<Vector<T>> {
        zip_with("subtract", self.as_slice(), other.as_slice(), |a, b| a - b)
    }

    /// Elementwise `other[i] - self[i]`.
    pub fn reflected_subtract(&self, other: &[T]) -> Result<Vector<T>> {
        zip_with("subtract", other, self.as_slice(), |a, b| a - b)
    }
}

impl<T> Vector<T>
where
    T: Clone + Mul<Output = T>,
{
    /// Scales by a scalar or multiplies elementwise by another vector.
    pub fn multiply(&self, other: Operand<'_, T>) -> Result<Vector<T>> {
        match other {
            Operand::Scalar(s) => Ok(self.scale(s)),
            Operand::Vector(v) => self.multiply_elementwise(v),
        }
    }

    /// Same as [`Vector::multiply`] with the vector on the right-hand side.
    pub fn reflected_multiply(&self, other: Operand<'_, T>) -> Result<Vector<T>> {
        match other {
            Operand::Scalar(s) => Ok(self.left_scale(s)),
            Operand::Vector(v) => zip_with("multiply", v.as_slice(), self.as_slice(), |a, b| a * b),
        }
    }

    pub fn multiply_elementwise(&self, other: &Vector<T>) -> Result<Vector<T>> {
        zip_with("multiply", self.as_slice(), other.as_slice(), |a, b| a * b)
    }

    /// `self[i] * scalar`
    pub fn scale(&self, scalar: T) -> Vector<T> {
        log::trace!("Scaling {} elements", self.len());
        self.iter().map(|x| x.clone() * scalar.clone()).collect()
    }

    /// `scalar * self[i]`
    pub fn left_scale(&self, scalar: T) -> Vector<T> {
        log::trace!("Left-scaling {} elements", self.len());
        self.iter().map(|x| scalar.clone() * x.clone()).collect()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.elements
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl<'a, 'b, T> Add<&'b Vector<T>> for &'a Vector<T>
where
    T: Clone + Add<Output = T>,
{
    type Output = Result<Vector<T>>;

    fn add(self, rhs: &'b Vector<T>) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl<'a, 'b, T> Sub<&'b Vector<T>> for &'a Vector<T>
where
    T: Clone + Sub<Output = T>,
{
    type Output = Result<Vector<T>>;

    fn sub(self, rhs: &'b Vector<T>) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a, 'b, T> Mul<&'b Vector<T>> for &'a Vector<T>
where
    T: Clone + Mul<Output = T>,
{
    type Output = Result<Vector<T>>;

    fn mul(self, rhs: &'b Vector<T>) -> Self::Output {
        self.multiply_elementwise(rhs)
    }
}

impl<'a, 'b, T> Add<&'b Vector<T>> for &'a [T]
where
    T: Clone + Add<Output = T>,
{
    type Output = Result<Vector<T>>;

    fn add(self, rhs: &'b Vector<T>) -> Self::Output {
        rhs.reflected_add(self)
    }
}

impl<'a, 'b, T> Sub<&'b Vector<T>> for &'a [T]
where
    T: Clone + Sub<Output = T>,
{
    type Output = Result<Vector<T>>;

    fn sub(self, rhs: &'b Vector<T>) -> Self::Output {
        rhs.reflected_subtract(self)
    }
}

impl<'a, 'b, T> Mul<&'b Vector<T>> for &'a [T]
where
    T: Clone + Mul<Output = T>,
{
    type Output = Result<Vector<T>>;

    fn mul(self, rhs: &'b Vector<T>) -> Self::Output {
        zip_with("multiply", self, rhs.as_slice(), |a, b| a * b)
    }
}

// Scalar operators need concrete element types on the left-hand side.
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<'a> Mul<$t> for &'a Vector<$t> {
                type Output = Vector<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.scale(rhs)
                }
            }

            impl<'a> Mul<&'a Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, rhs: &'a Vector<$t>) -> Self::Output {
                    rhs.left_scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector([")?;
        for (idx, value) in self.elements.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.elements.len() {
                write!(f, ",")?;
            }
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vectors_are_rows() {
        let v = Vector::from_vec(vec![1, 2, 3]);
        assert_eq!(v.orientation(), Orientation::Row);
        assert_eq!(Vector::from_elem(0u8, 2).orientation(), Orientation::Row);
    }

    #[test]
    fn from_elem_copies_are_independent() {
        let mut v = Vector::from_elem(vec![0, 0], 3);
        v.get_mut(1).unwrap().push(9);
        assert_eq!(v[0], vec![0, 0]);
        assert_eq!(v[1], vec![0, 0, 9]);
        assert_eq!(v[2], vec![0, 0]);
    }

    #[test]
    fn set_out_of_range_leaves_vector_untouched() {
        let mut v = Vector::from_vec(vec![1, 2, 3]);
        let err = v.set(3, 10).unwrap_err();
        assert_eq!(err, VectorError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(v.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn reflected_ops_swap_operands() {
        let v = Vector::from_vec(vec![1, 2, 3]);
        let diff = v.reflected_subtract(&[10, 10, 10]).unwrap();
        assert_eq!(diff.to_vec(), vec![9, 8, 7]);

        let sum = v.reflected_add(&[1, 1, 1]).unwrap();
        assert_eq!(sum.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn left_scale_keeps_operand_order() {
        // String concatenation is not commutative, so order is observable.
        #[derive(Clone, Debug, PartialEq)]
        struct Word(String);
        impl Mul for Word {
            type Output = Word;
            fn mul(self, rhs: Word) -> Word {
                Word(format!("{}{}", self.0, rhs.0))
            }
        }

        let v = Vector::from_vec(vec![Word("a".into()), Word("b".into())]);
        let right = v.scale(Word("x".into()));
        let left = v.left_scale(Word("x".into()));
        assert_eq!(right[0], Word("ax".into()));
        assert_eq!(left[0], Word("xa".into()));
        assert_eq!(left[1], Word("xb".into()));
    }

    #[test]
    fn display_empty() {
        let v: Vector<i32> = Vector::from_vec(vec![]);
        assert_eq!(v.to_string(), "Vector([])");
    }
}
