use elastic_bitvec::BitVec;

fn sieve(limit: usize) -> BitVec {
    let mut composite = BitVec::with_capacity(limit);
    composite.set_range(0..2);
    let mut p = 2;
    while p * p < limit {
        if !composite.get(p) {
            let mut multiple = p * p;
            while multiple < limit {
                composite.set(multiple);
                multiple += p;
            }
        }
        p += 1;
    }
    composite
}

fn main() {
    const LIMIT: usize = 100;
    let composite = sieve(LIMIT);
    let primes: Vec<usize> = (0..LIMIT).filter(|&n| !composite.get(n)).collect();
    println!("primes below {LIMIT}: {primes:?}");
}
