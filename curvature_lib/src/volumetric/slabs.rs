//! Parallel construction of derived grids.
//!
//! The output buffer is split into slabs of whole z slices, one slab per worker.
//! Slabs do not overlap, so workers write without any locking.
//! Inputs are shared immutably.

use std::panic;

use nalgebra::Vector3;

use crate::common::ValueRange;

use super::grid::flat_index;

/// Writes `compute(x, y, z)` into every interior voxel of `data`.
/// Border voxels (first and last index on any axis) keep their value.
///
/// Returns range of `measure` over *all* voxels of `data`, border included.
pub(crate) fn fill_interior<T, F, M>(
    size: Vector3<usize>,
    data: &mut [T],
    workers: usize,
    compute: F,
    measure: M,
) -> ValueRange
where
    T: Send,
    F: Fn(usize, usize, usize) -> T + Sync,
    M: Fn(&T) -> f32 + Sync,
{
    debug_assert_eq!(data.len(), size.product());

    if data.is_empty() {
        return ValueRange::empty();
    }

    let workers = workers.clamp(1, size.z);
    let slab_depth = (size.z + workers - 1) / workers;
    let slab_len = slab_depth * size.x * size.y;

    if workers == 1 {
        return fill_slab(size, data, 0, &compute, &measure);
    }

    let compute = &compute;
    let measure = &measure;

    // Scope assures threads will be joined before exiting the scope
    let partials = crossbeam::scope(|s| {
        let handles: Vec<_> = data
            .chunks_mut(slab_len)
            .enumerate()
            .map(|(id, slab)| {
                s.spawn(move |_| fill_slab(size, slab, id * slab_depth, compute, measure))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    });

    let partials = match partials {
        Ok(p) => p,
        Err(payload) => panic::resume_unwind(payload),
    };

    partials
        .into_iter()
        .fold(ValueRange::empty(), |acc, partial| match partial {
            Ok(range) => acc.merge(&range),
            Err(payload) => panic::resume_unwind(payload),
        })
}

// slab starts at slice `z_start`
fn fill_slab<T, F, M>(
    size: Vector3<usize>,
    slab: &mut [T],
    z_start: usize,
    compute: &F,
    measure: &M,
) -> ValueRange
where
    F: Fn(usize, usize, usize) -> T,
    M: Fn(&T) -> f32,
{
    let slice_len = size.x * size.y;
    let mut range = ValueRange::empty();

    for (offset, slice) in slab.chunks_mut(slice_len).enumerate() {
        let z = z_start + offset;

        if z >= 1 && z + 1 < size.z {
            for y in 1..size.y.saturating_sub(1) {
                for x in 1..size.x.saturating_sub(1) {
                    slice[flat_index(&size, x, y, 0)] = compute(x, y, z);
                }
            }
        }

        for voxel in slice.iter() {
            range.extend(measure(voxel));
        }
    }

    range
}

#[cfg(test)]
mod test {

    use nalgebra::vector;

    use super::*;

    fn encode(x: usize, y: usize, z: usize) -> f32 {
        (x + 10 * y + 100 * z) as f32
    }

    #[test]
    fn border_untouched() {
        let size = vector![4, 3, 5];
        let mut data = vec![-1.0f32; size.product()];

        fill_interior(size, &mut data, 1, encode, |v| *v);

        for z in 0..size.z {
            for y in 0..size.y {
                for x in 0..size.x {
                    let v = data[flat_index(&size, x, y, z)];
                    let interior = (1..size.x - 1).contains(&x)
                        && (1..size.y - 1).contains(&y)
                        && (1..size.z - 1).contains(&z);
                    if interior {
                        assert_eq!(v, encode(x, y, z));
                    } else {
                        assert_eq!(v, -1.0);
                    }
                }
            }
        }
    }

    #[test]
    fn workers_agree() {
        let size = vector![6, 5, 11];
        let mut single = vec![0.0f32; size.product()];
        let range_single = fill_interior(size, &mut single, 1, encode, |v| *v);

        for workers in [2, 3, 4, 11, 64] {
            let mut multi = vec![0.0f32; size.product()];
            let range_multi = fill_interior(size, &mut multi, workers, encode, |v| *v);

            assert_eq!(single, multi, "{workers} workers");
            assert_eq!(range_single, range_multi, "{workers} workers");
        }
    }

    #[test]
    fn range_covers_border() {
        let size = vector![3, 3, 3];
        let mut data = vec![0.0f32; size.product()];

        let range = fill_interior(size, &mut data, 2, |_, _, _| 5.0, |v| *v);

        assert_eq!(range.low, 0.0);
        assert_eq!(range.high, 5.0);
    }

    #[test]
    fn empty_and_thin_grids() {
        let mut empty: Vec<f32> = vec![];
        assert!(fill_interior(vector![0, 4, 4], &mut empty, 4, encode, |v| *v).is_empty());

        // no interior at all
        let size = vector![2, 8, 8];
        let mut thin = vec![1.0f32; size.product()];
        let range = fill_interior(size, &mut thin, 4, encode, |v| *v);
        assert!(thin.iter().all(|&v| v == 1.0));
        assert_eq!(range, ValueRange::seed(1.0));
    }

    #[test]
    #[should_panic(expected = "worker failure")]
    fn worker_panic_propagates() {
        let size = vector![4, 4, 8];
        let mut data = vec![0.0f32; size.product()];
        fill_interior(
            size,
            &mut data,
            4,
            |_, _, z| {
                if z == 6 {
                    panic!("worker failure");
                }
                0.0
            },
            |v| *v,
        );
    }
}
