use esp::{Operand, Vector};

fn main() -> esp::Result<()> {
    env_logger::init();

    let a = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Vector::from_vec(vec![4.0, 5.0, 6.0]);

    println!("{} + {} = {}", a, b, a.add(&b)?);
    println!("{} - {} = {}", b, a, b.subtract(&a)?);
    println!("{} * {} = {}", a, b, a.multiply(Operand::Vector(&b))?);
    println!("{} * 2 = {}", a, a.multiply(Operand::Scalar(2.0))?);

    let mut repeated = Vector::from_elem(0.5, 4);
    repeated.set(2, 1.5)?;
    println!("repeated: {}", repeated);

    if let Err(e) = a.norm(2.0) {
        log::warn!("{}", e);
    }

    Ok(())
}
