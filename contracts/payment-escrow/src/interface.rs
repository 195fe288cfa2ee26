use crate::types::Escrow;
use soroban_sdk::{contracttrait, Address, Env};

#[contracttrait]
pub trait PaymentEscrowTrait {
    fn initialize(env: Env, admin: Address, treasury: Address, token: Address, fee_bps: u32);

    fn escrow(env: Env, payer: Address, order_id: u64, amount: i128);
    fn release(env: Env, caller: Address, order_id: u64, restaurant: Address);
    fn refund(env: Env, caller: Address, order_id: u64);

    fn set_fee_bps(env: Env, caller: Address, fee_bps: u32);
    fn set_admin(env: Env, caller: Address, new_admin: Address);

    fn get_escrow(env: Env, order_id: u64) -> Escrow;
    fn fee_bps(env: Env) -> u32;
    fn get_admin(env: Env) -> Address;
    fn get_treasury(env: Env) -> Address;
    fn get_token(env: Env) -> Address;
}
