use npyfile::{load, load_dyn, NdArray, ReadNpyError};

fn read_example() -> Result<(), ReadNpyError> {
    let arr: NdArray<i64> = load("resources/two_d.npy")?;
    println!("shape = {:?}, strides = {:?}", arr.shape(), arr.strides());
    if let Some(row) = arr.row(0) {
        println!("row 0 = {:?}", row);
    }
    println!("arr[[3, 4]] = {}", arr[[3, 4]]);
    Ok(())
}

fn read_dyn_example() -> Result<(), ReadNpyError> {
    let arr = load_dyn("resources/legacy_one_d_u4.npy")?;
    println!("dtype = {}, shape = {:?}", arr.dtype(), arr.shape());
    Ok(())
}

fn main() {
    read_example().expect("failure reading array from file");
    read_dyn_example().expect("failure reading array of unknown type from file");
}
