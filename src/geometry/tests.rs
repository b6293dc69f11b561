use {
  super::*,
  crate::error::{Error, Result},
  rand::prelude::*
};

fn close(a: f64, b: f64) -> bool {
  (a - b).abs() < 1e-9
}

#[test] fn length_and_access() -> Result<()> {
  let mut p = PointND::new(vec![1, 2, 3]);
  assert_eq!(p.len(), 3);
  assert_eq!(p.get(2)?, 3);
  assert!(matches!(p.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 })));

  p.set(0, 10)?.set(1, 20)?;
  assert_eq!(p, [10, 20, 3]);
  assert!(matches!(p.set(5, 0), Err(Error::IndexOutOfRange { index: 5, len: 3 })));
  assert_eq!(p.len(), 3);

  p[2] = 30;
  assert_eq!(p[2], 30);
  Ok(())
}

#[test] #[should_panic] fn index_out_of_range_panics() {
  let p = PointND::new(vec![1.0, 2.0]);
  let _ = p[2];
}

#[test] fn construction_copies_input() {
  let mut source = vec![1, 2];
  let p = PointND::from_slice(&source);
  source[0] = 100;
  assert_eq!(p, [1, 2]);

  let q = PointND::from(p.clone());
  assert_eq!(p, q);
}

#[test] fn equality() {
  let p = PointND::new(vec![1, 2, 3]);
  let q = PointND::new(vec![1, 2, 3]);
  assert_eq!(p, p);
  assert_eq!(p, q);
  assert!(!(p != q));
  assert_ne!(p, PointND::new(vec![1, 2]));
  assert_ne!(p, PointND::new(vec![1, 2, 4]));

  // with plain sequences, both ways
  assert_eq!(p, vec![1, 2, 3]);
  assert_eq!(vec![1, 2, 3], p);
  assert_eq!([1, 2, 3], p);
  assert!(p == [1, 2, 3][..]);
  assert_ne!(p, vec![1, 2, 3, 4]);

  // across kinds
  let p2 = Point2D::new(1, 2);
  assert_eq!(p2, PointND::new(vec![1, 2]));
  assert_eq!(PointND::new(vec![1, 2]), p2);
  assert_ne!(PointND::new(vec![1, 2, 0]), p2);

  let slice: &[i32] = &[1, 2, 3];
  assert!(*slice == p);
  assert!(*slice != PointND::new(vec![1, 2]));

  // fixed-arity kinds against sequences, both ways
  assert_eq!(p2, vec![1, 2]);
  assert_eq!(vec![1, 2], p2);
  assert_eq!([1, 2], p2);
  assert!(p2 == [1, 2][..]);
  assert!([1, 2][..] == p2);
  assert_ne!(vec![1, 2, 0], p2);

  let p3 = Point3D::new(1, 2, 0);
  assert_eq!(p3, vec![1, 2, 0]);
  assert!(p3 == [1, 2, 0][..]);
  assert!([1, 2, 0][..] == p3);

  // different arity is never equal
  assert!(p2 != p3);
  assert!(p3 != p2);
  assert_ne!(Point2D::new(0, 0), Point3D::new(0, 0, 0));
}

#[test] fn basic_math() {
  let p = PointND::new(vec![1, 2, 3]);
  let q = PointND::new(vec![4, 5, 6]);

  assert_eq!(&p + &q, [5, 7, 9]);
  assert_eq!(&q - &p, [3, 3, 3]);
  assert_eq!(&p * &q, [4, 10, 18]);
  assert_eq!(&q / &p, [4, 2, 2]);

  assert_eq!(&p + 1, [2, 3, 4]);
  assert_eq!(&p - 1, [0, 1, 2]);
  assert_eq!(&p * 2, [2, 4, 6]);
  assert_eq!(p.clone() / 2, [0, 1, 1]);

  // operands are untouched
  assert_eq!(p, [1, 2, 3]);
  assert_eq!(q, [4, 5, 6]);
}

#[test] fn add_then_subtract_round_trips() {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  for len in 0..8 {
    let p: PointND<i64> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
    let q: PointND<i64> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
    assert_eq!((&p + &q) - &q, p);
  }
}

#[test] fn shorter_operand_uses_identity() {
  let p = PointND::new(vec![2, 3, 4]);
  let short = PointND::new(vec![10]);
  assert_eq!(&p + &short, [12, 3, 4]);
  assert_eq!(&p - &short, [-8, 3, 4]);
  assert_eq!(&p * &short, [20, 3, 4]);
  assert_eq!(&p / &short, [0, 3, 4]);

  // the result keeps the receiver's length
  let long = PointND::new(vec![1, 1, 1, 1, 1]);
  assert_eq!((&p + &long).len(), 3);
  assert_eq!((&short + &long), [11]);
}

#[test] fn explicit_operand() {
  let p = PointND::new(vec![1.0, 2.0]);
  let scaled = p.elementwise(Operand::Scalar(3.0), 1.0, |a, b| a * b);
  assert_eq!(scaled, [3.0, 6.0]);
  let shifted = p.elementwise(&[0.5][..], 0.0, |a, b| a + b);
  assert_eq!(shifted, [1.5, 2.0]);
  let max = p.elementwise(&PointND::new(vec![5.0, 0.0]), f64::MIN, f64::max);
  assert_eq!(max, [5.0, 2.0]);
}

#[test] fn dot_product() -> Result<()> {
  assert_eq!(PointND::new(vec![1, 2]).dot(&PointND::new(vec![3, 4]))?, 11);

  let mut rng = rand_pcg::Pcg64::seed_from_u64(1);
  let p: PointND<i64> = (0..16).map(|_| rng.gen_range(-50..50)).collect();
  let q: PointND<i64> = (0..16).map(|_| rng.gen_range(-50..50)).collect();
  let brute_force: i64 = (0..16).map(|i| p[i] * q[i]).sum();
  assert_eq!(p.dot(&q)?, brute_force);

  let err = PointND::new(vec![1, 2]).dot(&PointND::new(vec![1, 2, 3]));
  assert!(matches!(err, Err(Error::Dimensionality { expected: 2, found: 3 })));
  Ok(())
}

#[test] fn distance() -> Result<()> {
  assert_eq!(PointND::new(vec![0, 0]).distance(&PointND::new(vec![3, 4]))?, 5.0);
  assert!(close(
    PointND::new(vec![1.0, 1.0, 1.0]).distance(&PointND::new(vec![2.0, 2.0, 2.0]))?,
    3f64.sqrt()
  ));
  let p = PointND::new(vec![0.5, -2.0]);
  assert_eq!(p.distance(&p)?, 0.0);

  let err = PointND::new(vec![1.0]).distance(&PointND::new(vec![1.0, 2.0]));
  assert!(matches!(err, Err(Error::Dimensionality { .. })));
  Ok(())
}

#[test] fn iteration_is_restartable() {
  let p = PointND::new(vec![3, 4, 5]);
  let first: Vec<_> = p.iter().copied().collect();
  let second: Vec<_> = (&p).into_iter().copied().collect();
  assert_eq!(first, vec![3, 4, 5]);
  assert_eq!(first, second);
  assert_eq!(p.iter().sum::<i32>(), 12);
  assert_eq!(p.into_iter().rev().collect::<Vec<_>>(), vec![5, 4, 3]);
}

#[test] fn format() {
  assert_eq!(PointND::new(vec![3, 4, 5]).to_string(), "(3, 4, 5)");
  assert_eq!(PointND::new(vec![1.5, -2.0]).to_string(), "(1.5, -2)");
  assert_eq!(PointND::<i32>::new(vec![]).to_string(), "()");
  assert_eq!(Point2D::new(1, 2).to_string(), "(1, 2)");
}

#[test] fn parse() -> Result<()> {
  assert_eq!("(3, 4, 5)".parse::<PointND<i32>>()?, PointND::new(vec![3, 4, 5]));
  assert_eq!("(3, 4.5)".parse::<PointND<f64>>()?, [3.0, 4.5]);
  assert_eq!("()".parse::<PointND<f64>>()?.len(), 0);
  assert_eq!(" (1, 2) ".parse::<Point2D<i32>>()?, Point2D::new(1, 2));

  for bad in ["3, 4", "(3, 4", "(a, 4)", "(3,4)", "(3, , 4)"] {
    assert!(
      matches!(bad.parse::<PointND<i32>>(), Err(Error::Parse { .. })),
      "{bad:?} should not parse"
    );
  }
  assert!(matches!("(1.5, 2)".parse::<PointND<i32>>(), Err(Error::Parse { .. })));
  assert!(matches!("(1, 2, 3)".parse::<Point2D<i32>>(), Err(Error::Dimensionality { expected: 2, found: 3 })));
  Ok(())
}

#[test] fn format_parse_round_trip() -> Result<()> {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(2);
  for len in 0..6 {
    let p: PointND<f64> = (0..len).map(|_| rng.gen_range(-1e6..1e6)).collect();
    assert_eq!(p.to_string().parse::<PointND<f64>>()?, p);
    let q: PointND<i64> = (0..len).map(|_| rng.gen()).collect();
    assert_eq!(q.to_string().parse::<PointND<i64>>()?, q);
  }
  Ok(())
}

#[test] fn named_accessors() -> Result<()> {
  let mut p = Point2D::new(1.0, 2.0);
  assert_eq!((p.x(), p.y()), (1.0, 2.0));
  p.set_x(5.0).set_y(6.0);
  *p.y_mut() += 1.0;
  assert_eq!(p, [5.0, 7.0]);
  assert_eq!(p.get(0)?, 5.0);
  p.set(1, 0.0)?;
  assert_eq!(p.y(), 0.0);
  assert!(matches!(p.set(2, 0.0), Err(Error::IndexOutOfRange { index: 2, len: 2 })));

  let mut q = Point3D::new(1, 2, 3);
  q.set_z(9);
  q[0] = 7;
  assert_eq!((q.x(), q.y(), q.z()), (7, 2, 9));
  Ok(())
}

#[test] fn arithmetic_keeps_kind() {
  let a = Point2D::new(1.0, 2.0);
  let b = Point2D::new(3.0, 6.0);
  let sum: Point2D<f64> = &a + &b;
  assert_eq!(sum.x(), 4.0);
  let mid: Point2D<f64> = a.midpoint(&b);
  assert_eq!(mid, [2.0, 4.0]);

  let c = Point3D::new(2, 4, 6);
  let half: Point3D<i32> = c / 2;
  assert_eq!(half.z(), 3);
}

#[test] fn midpoint_does_not_truncate() {
  let a = PointND::new(vec![-1.0, 0.0]);
  let b = PointND::new(vec![0.0, 0.0]);
  assert_eq!(a.midpoint(&b), [-0.5, 0.0]);
  assert_eq!(PointKind::midpoint(&a, &b), [-0.5, 0.0]);

  let c: Point3D<f32> = Point3D::new(1.0, 2.0, 3.0).midpoint(&Point3D::new(2.0, 3.0, 4.0));
  assert_eq!(c, [1.5, 2.5, 3.5]);
}

#[test] fn kind_conversions() -> Result<()> {
  let nd: PointND<i32> = Point3D::new(1, 2, 3).into();
  assert_eq!(nd.len(), 3);
  let back = Point3D::try_from(nd.clone())?;
  assert_eq!(back.z(), 3);
  assert!(matches!(Point2D::try_from(nd), Err(Error::Dimensionality { expected: 2, found: 3 })));

  let e = Point2D::new(0.5f64, 1.5).to_euclid();
  assert_eq!((e.x, e.y), (0.5, 1.5));
  assert_eq!(Point2D::from(e), Point2D::new(0.5, 1.5));
  assert_eq!(Point3D::from([1, 2, 3]), Point3D::new(1, 2, 3));

  // dimensionality checks go through the common core
  let a = Point2D::new(0, 0);
  assert_eq!(a.distance(&Point2D::new(3, 4))?, 5.0);
  assert_eq!(a.dot(&Point2D::new(3, 4))?, 0);
  assert_eq!(a.len(), 2);
  Ok(())
}

#[test] fn triangle_is_equilateral() -> Result<()> {
  let [a, b, c] = triangle_2d(2.0);
  assert_eq!(a, [0.0, 0.0]);
  assert_eq!(b, [2.0, 0.0]);
  for (p, q) in [(&a, &b), (&b, &c), (&a, &c)] {
    assert!(close(p.distance(q)?, 2.0));
  }
  assert!(close(c.y(), 3f64.sqrt()));
  Ok(())
}

#[test] fn tetrahedron_is_regular() -> Result<()> {
  let side = 3.0;
  let vertices = tetrahedron_3d(side);
  for i in 0..4 {
    for j in i + 1..4 {
      assert!(close(vertices[i].distance(&vertices[j])?, side), "edge {i}-{j}");
    }
  }
  assert!(close(vertices[3].y(), side * 6f64.sqrt() / 3.0));
  Ok(())
}

#[test] fn vertex_validation() {
  assert!(matches!(validate_vertices::<PointND<f64>>(&[]), Err(Error::EmptyVertexSet)));
  assert_eq!(validate_vertices(&triangle_2d(1.0)).ok(), Some(2));

  let mixed: Vec<PointND<f64>> = vec![
    Point2D::new(0.0, 0.0).into(),
    Point3D::new(1.0, 0.0, 0.0).into(),
    Point2D::new(0.0, 1.0).into()
  ];
  assert!(matches!(validate_vertices(&mixed), Err(Error::Dimensionality { expected: 2, found: 3 })));
}

#[test] fn sampled_points_stay_inside_triangle() {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(3);
  let vertices = triangle_2d(1.0);
  let h = 3f64.sqrt() / 2.0;
  for _ in 0..1000 {
    let p = sample_triangle(&vertices, &mut rng);
    assert!(p.y() >= 0.0 && p.y() <= h);
    // left and right edges
    assert!(p.y() <= 2.0 * h * p.x() + 1e-9);
    assert!(p.y() <= 2.0 * h * (1.0 - p.x()) + 1e-9);
  }
}
