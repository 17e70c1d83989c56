mod common;
mod normalizers;
