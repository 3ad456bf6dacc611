pub mod locate_lake;
