use ht_tools::{rescale, reading_ht_data, square};
use ndarray::{Array2, Array3};
use proptest::prelude::*;

// Property 1: square is element-wise x*x and keeps the shape
proptest! {
    #[test]
    fn prop_square_elementwise(
        (n, values) in (1usize..8).prop_flat_map(|n| {
            (Just(n), prop::collection::vec(-1.0e3f64..1.0e3f64, n * n))
        })
    ) {
        let a = Array2::from_shape_vec((n, n), values).unwrap();
        let out = square(&a);

        prop_assert_eq!(out.shape(), a.shape());
        for ((i, j), &v) in out.indexed_iter() {
            prop_assert_eq!(v, a[[i, j]] * a[[i, j]]);
        }
    }
}

// Property 2: rescaling keeps the shape of (N, N, N) input
proptest! {
    #[test]
    fn prop_rescale_cube_shape(
        (n, values) in (3usize..6).prop_flat_map(|n| {
            (Just(n), prop::collection::vec(-1.0e4f64..1.0e4f64, n * n * n))
        })
    ) {
        let cube = Array3::from_shape_vec((n, n, n), values).unwrap();
        let out = reading_ht_data(cube).unwrap();
        prop_assert_eq!(out.shape(), &[n, n, n][..]);
    }
}

// Property 3: each row is converted field by field
proptest! {
    #[test]
    fn prop_rescale_rows(rows in prop::collection::vec(
        (1900.0f64..2100.0, -1.0e6f64..1.0e6, -1.0e6f64..1.0e6),
        1..50
    )) {
        let flat: Vec<f64> = rows.iter().flat_map(|&(t, a, b)| [t, a, b]).collect();
        let table = Array2::from_shape_vec((rows.len(), 3), flat).unwrap();
        let out = rescale(&table).unwrap();

        for (i, &(t, a, b)) in rows.iter().enumerate() {
            prop_assert_eq!(out[[i, 0]], (t - 1973.0) * 366.242);
            prop_assert_eq!(out[[i, 1]], a / 86164.1);
            prop_assert_eq!(out[[i, 2]], b / 86164.1);
        }
    }
}

// Property 4: a second pass converts the units again
proptest! {
    #[test]
    fn prop_rescale_not_idempotent(t in 1990.0f64..2100.0) {
        let table = Array2::from_shape_vec((1, 3), vec![t, 1.0, 1.0]).unwrap();
        let once = rescale(&table).unwrap();
        let twice = rescale(&once).unwrap();
        prop_assert_ne!(once[[0, 0]], twice[[0, 0]]);
        prop_assert_ne!(once[[0, 1]], twice[[0, 1]]);
    }
}
