pub mod checkin;
pub mod codes;
pub mod home;
pub mod roster;
