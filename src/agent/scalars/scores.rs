pub mod consts
{
    /// The starting value of a maximizing fold; every real score beats it.
    pub const WORST: i32 = i32::MIN;

    /// The starting value of a minimizing fold; every real score beats it.
    pub const BEST: i32 = i32::MAX;
}
