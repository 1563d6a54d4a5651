pub mod dccp;
pub mod samples;
pub mod wire;

#[cfg(test)]
mod test;
