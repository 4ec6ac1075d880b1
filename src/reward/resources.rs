pub struct RewardId {
    pub id: u32,
}
