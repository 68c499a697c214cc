use soroban_sdk::{token, Address, Env};

// Pull a contribution into contract custody
pub fn transfer_to_contract(env: &Env, token: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), amount);
}

// Pay out of contract custody
pub fn transfer_from_contract(env: &Env, token: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, amount);
}

// Reward units the owner has approved this contract to spend
pub fn allowance_from_owner(env: &Env, token: &Address, owner: &Address) -> i128 {
    token::Client::new(env, token).allowance(owner, &env.current_contract_address())
}

// Spend the contract's allowance on the owner's balance
pub fn transfer_from_owner(env: &Env, token: &Address, owner: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer_from(
        &env.current_contract_address(),
        owner,
        to,
        amount,
    );
}
