pub mod batch;
pub mod brick;
pub mod hypotenuse;
pub mod selftest;
