//! Maximum subarray (Section 4.1 and Exercise 4.1-5).
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use std::str::FromStr;

/// A contiguous run `array[begin..end]` and its sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxSubarray<T> {
    pub begin: usize,
    pub end: usize,
    pub sum: T,
}

impl<T> MaxSubarray<T> {
    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }
}

impl<T: Zero> MaxSubarray<T> {
    fn empty() -> Self {
        Self {
            begin: 0,
            end: 0,
            sum: T::zero(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SubarrayMethod {
    #[default]
    DivideAndConquer,
    Linear,
}

impl SubarrayMethod {
    pub fn find<T>(&self, array: &[T]) -> MaxSubarray<T>
    where
        T: Copy + PartialOrd + Add<Output = T> + Zero,
    {
        match self {
            SubarrayMethod::DivideAndConquer => find_max_subarray(array),
            SubarrayMethod::Linear => find_max_subarray_linear(array),
        }
    }
}

impl FromStr for SubarrayMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "divide" | "divide-and-conquer" | "dc" => Ok(SubarrayMethod::DivideAndConquer),
            "linear" | "kadane" | "faster" => Ok(SubarrayMethod::Linear),
            _ => Err(format!("Unknown subarray method: {}", s)),
        }
    }
}

/// Best subarray that contains both `array[mid - 1]` and `array[mid]`.
///
/// Requires `0 < mid < array.len()`; indices are relative to `array`.
fn find_max_crossing<T>(array: &[T], mid: usize) -> MaxSubarray<T>
where
    T: Copy + PartialOrd + Add<Output = T>,
{
    let mut best = array[mid - 1];
    let mut running = best;
    let mut begin = mid - 1;
    for i in (0..mid - 1).rev() {
        running = running + array[i];
        if running > best {
            best = running;
            begin = i;
        }
    }

    best = best + array[mid];
    running = best;
    let mut end = mid + 1;
    for (i, &value) in array.iter().enumerate().skip(mid + 1) {
        running = running + value;
        if running > best {
            best = running;
            end = i + 1;
        }
    }

    MaxSubarray {
        begin,
        end,
        sum: best,
    }
}

fn find_max_rec<T>(array: &[T], offset: usize) -> MaxSubarray<T>
where
    T: Copy + PartialOrd + Add<Output = T>,
{
    if array.len() == 1 {
        return MaxSubarray {
            begin: offset,
            end: offset + 1,
            sum: array[0],
        };
    }
    let mid = array.len() / 2;
    let left = find_max_rec(&array[..mid], offset);
    let right = find_max_rec(&array[mid..], offset + mid);
    let cross = find_max_crossing(array, mid);

    if left.sum >= right.sum && left.sum >= cross.sum {
        left
    } else if right.sum >= left.sum && right.sum >= cross.sum {
        right
    } else {
        MaxSubarray {
            begin: offset + cross.begin,
            end: offset + cross.end,
            sum: cross.sum,
        }
    }
}

/// Divide-and-conquer maximum subarray, Θ(n log n).
///
/// The best run lies entirely in the left half, entirely in the right
/// half, or crosses the midpoint; ties prefer left, then right.
/// An empty array yields the empty run `[0, 0)` with sum zero.
pub fn find_max_subarray<T>(array: &[T]) -> MaxSubarray<T>
where
    T: Copy + PartialOrd + Add<Output = T> + Zero,
{
    if array.is_empty() {
        return MaxSubarray::empty();
    }
    find_max_rec(array, 0)
}

/// Single-pass maximum subarray, Θ(n).
///
/// Tracks the best sum of a run ending at the current element; once that
/// running sum drops below zero no maximum subarray can start inside it,
/// so the left bound moves past the current element.
pub fn find_max_subarray_linear<T>(array: &[T]) -> MaxSubarray<T>
where
    T: Copy + PartialOrd + Add<Output = T> + Zero,
{
    let Some(&first) = array.first() else {
        return MaxSubarray::empty();
    };

    let mut best = MaxSubarray {
        begin: 0,
        end: 1,
        sum: first,
    };
    let mut running = first;
    let mut left = 0;
    if running < T::zero() {
        running = T::zero();
        left = 1;
    }

    for (i, &value) in array.iter().enumerate().skip(1) {
        let here = running + value;
        if here > best.sum {
            best = MaxSubarray {
                begin: left,
                end: i + 1,
                sum: here,
            };
        }
        if here < T::zero() {
            running = T::zero();
            left = i + 1;
        } else {
            running = here;
        }
    }
    best
}

/// Θ(n²) scan of every non-empty contiguous run.
pub fn max_subarray_brute<T>(array: &[T]) -> Option<T>
where
    T: Copy + PartialOrd + Add<Output = T>,
{
    let mut best: Option<T> = None;
    for i in 0..array.len() {
        let mut sum = array[i];
        if best.map_or(true, |b| sum > b) {
            best = Some(sum);
        }
        for &value in &array[i + 1..] {
            sum = sum + value;
            if best.map_or(true, |b| sum > b) {
                best = Some(sum);
            }
        }
    }
    best
}
