fn main() {
    println!("2 + 3 = {}", arith_core::add(2, 3));
}
