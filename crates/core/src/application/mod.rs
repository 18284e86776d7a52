// Application Layer - Use cases

pub mod increment;
