use curvature_lib::{
    curvature_of,
    histogram::Histogram,
    test_helpers,
    transfer_functions::SecondDerivativeTf,
    volumetric::{CurvatureVoxel, DerivativeOptions, GradientVolume},
    CurvatureVolume, InterpolationMode, LinearVolume, Volume,
};
use nalgebra::{point, vector, Point3, Vector3};

pub const SIZE: Vector3<usize> = vector![16, 14, 12];

fn sphere() -> LinearVolume {
    test_helpers::sphere_volume(SIZE, 4.0)
}

#[test]
fn nearest_identity_on_interior() {
    let curvature = CurvatureVolume::from_volume(&sphere());

    for z in 1..SIZE.z - 1 {
        for y in 1..SIZE.y - 1 {
            for x in 1..SIZE.x - 1 {
                let pos = point![x as f32, y as f32, z as f32];
                assert_eq!(curvature.sample_at(pos), curvature.get_voxel(x, y, z));
            }
        }
    }
}

#[test]
fn trilinear_is_continuous() {
    let vol = sphere();
    let curvature = CurvatureVolume::from_volume(&vol);
    curvature.set_interpolation_mode(InterpolationMode::Linear);

    let boundary = curvature.get_voxel(6, 5, 4).magnitude;
    let scale = curvature.max_magnitude().max(1.0);

    for eps in [1e-2f32, 1e-3, 1e-4] {
        let below = curvature.sample_at(point![6.0 - eps, 5.0, 4.0]).magnitude;
        let above = curvature.sample_at(point![6.0 + eps, 5.0, 4.0]).magnitude;
        let tolerance = 4.0 * eps * scale;

        assert!((below - boundary).abs() <= tolerance, "eps {eps}");
        assert!((above - boundary).abs() <= tolerance, "eps {eps}");
    }
}

#[test]
fn out_of_range_returns_zero_voxel() {
    let curvature = CurvatureVolume::from_volume(&sphere());
    let zero = CurvatureVoxel::zero();
    let last = (SIZE - vector![1, 1, 1]).cast::<f32>();

    let outside_both: [Point3<f32>; 4] = [
        point![-0.5, 3.0, 3.0],
        point![3.0, -1e-4, 3.0],
        point![SIZE.x as f32, 3.0, 3.0],
        point![3.0, 3.0, SIZE.z as f32 + 2.0],
    ];
    for pos in outside_both {
        for mode in InterpolationMode::ALL {
            assert_eq!(curvature.sample_with(pos, mode), zero, "{pos:?} {mode:?}");
        }
    }

    // Only linear reads past the last voxel
    let edge = point![last.x, 3.0, 3.0];
    assert_eq!(curvature.sample_with(edge, InterpolationMode::Linear), zero);
    assert_eq!(curvature.sample_with(edge, InterpolationMode::Cubic), zero);
    assert_eq!(
        curvature.sample_with(edge, InterpolationMode::NearestNeighbour),
        curvature.get_voxel(SIZE.x - 1, 3, 3)
    );
}

#[test]
fn min_max_cover_all_voxels() {
    let curvature = curvature_of(&sphere(), 4).unwrap();
    let min = curvature.min_magnitude();
    let max = curvature.max_magnitude();

    assert!(curvature
        .voxels()
        .iter()
        .all(|v| min <= v.magnitude && v.magnitude <= max));
    assert!(curvature.voxels().iter().any(|v| v.magnitude == min));
    assert!(curvature.voxels().iter().any(|v| v.magnitude == max));
}

#[test]
fn flat_volume_is_zero_everywhere() {
    let vol = test_helpers::flat_volume(SIZE, 80.0);
    let gradients = GradientVolume::from_volume(&vol);
    let curvature = CurvatureVolume::from_volume(&vol);

    assert!(gradients.voxels().iter().all(|g| g.magnitude == 0.0));
    assert!(curvature.voxels().iter().all(|c| c.magnitude == 0.0));
    assert_eq!(curvature.min_magnitude(), 0.0);
    assert_eq!(curvature.max_magnitude(), 0.0);
}

#[test]
fn ramp_volume() {
    let vol = test_helpers::ramp_volume(SIZE);
    let gradients = GradientVolume::from_volume(&vol);
    let curvature = CurvatureVolume::from_volume(&vol);

    for z in 2..SIZE.z - 2 {
        for y in 2..SIZE.y - 2 {
            for x in 2..SIZE.x - 2 {
                assert_eq!(gradients.get_voxel(x, y, z).direction.x, 1.0);
                assert!(curvature.get_voxel(x, y, z).magnitude < 1e-5);
            }
        }
    }
}

#[test]
fn step_volume_stays_finite() {
    // Large flat regions next to a sharp step
    let vol = LinearVolume::from_fn(SIZE, |x, _, _| if x < 8 { 0.0 } else { 255.0 }).unwrap();
    let curvature = CurvatureVolume::from_volume(&vol);

    assert!(curvature
        .voxels()
        .iter()
        .all(|v| v.magnitude.is_finite() && v.magnitude >= 0.0));
    assert!(curvature.max_magnitude() > 0.0);
}

#[test]
fn mode_switch_while_sampling() {
    let curvature = CurvatureVolume::from_volume(&sphere());
    let pos = point![5.5, 6.25, 3.75];

    crossbeam::scope(|s| {
        for _ in 0..4 {
            s.spawn(|_| {
                for _ in 0..1000 {
                    let v = curvature.sample_at(pos);
                    let nearest = curvature.sample_with(pos, InterpolationMode::NearestNeighbour);
                    let linear = curvature.sample_with(pos, InterpolationMode::Linear);
                    assert!(v == nearest || v == linear);
                }
            });
        }
        for i in 0..1000 {
            let mode = if i % 2 == 0 {
                InterpolationMode::Linear
            } else {
                InterpolationMode::NearestNeighbour
            };
            curvature.set_interpolation_mode(mode);
        }
    })
    .unwrap();
}

#[test]
fn histogram_and_transfer_function() {
    let vol = sphere();
    let options = DerivativeOptions::builder()
        .interpolation(InterpolationMode::Linear)
        .build()
        .unwrap();
    let curvature = CurvatureVolume::with_options(&vol, &options);

    let histogram = Histogram::from_volumes(&vol, &curvature, (32, 16)).unwrap();
    assert_eq!(histogram.total(), vol.voxel_count() as u64);
    assert_eq!(histogram.to_image().len(), 32 * 16);

    let tf = SecondDerivativeTf {
        intensity: 200.0,
        radius: 60.0,
        threshold: curvature.max_magnitude() / 2.0,
        ..Default::default()
    };
    let centre = point![7.5, 6.5, 5.5];
    let color = tf.evaluate_at(&vol, &curvature, centre);
    assert!(color.w > 0.0);
}
