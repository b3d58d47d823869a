// Arithmetic instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Fault;

impl Cpu {
    /// ADC - Add with Carry
    ///
    /// A = A + M + C, computed in 9 bits. C takes the carry-out, Z and N
    /// follow the 8-bit result, and V flags signed overflow:
    /// `(A^result) & (M^result) & 0x80`.
    ///
    /// The D flag is stored and restored normally but never consulted;
    /// the 2A03 has no decimal circuit.
    ///
    /// Flags affected: C, Z, V, N
    pub fn adc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        let carry = self.get_carry() as u16;

        let sum = self.a as u16 + value as u16 + carry;
        self.set_carry(sum > 0xFF);

        let result = sum as u8;
        self.set_overflow((self.a ^ result) & (value ^ result) & 0x80 != 0);

        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// SBC - Subtract with Carry
    ///
    /// Equivalent to ADC with the one's complement of the operand: the
    /// carry denotes "no borrow".
    ///
    /// Flags affected: C, Z, V, N
    pub fn sbc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        let inverted = !value;
        let carry = self.get_carry() as u16;

        let sum = self.a as u16 + inverted as u16 + carry;
        self.set_carry(sum > 0xFF);

        let result = sum as u8;
        self.set_overflow((self.a ^ result) & (inverted ^ result) & 0x80 != 0);

        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// INC - Increment Memory
    ///
    /// Flags affected: Z, N
    pub fn inc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) -> Result<(), Fault> {
        let result = bus.read(addr_result.address).wrapping_add(1);
        bus.write(addr_result.address, result)?;
        self.update_zero_and_negative_flags(result);
        Ok(())
    }

    /// DEC - Decrement Memory
    ///
    /// Flags affected: Z, N
    pub fn dec(&mut self, bus: &mut Bus, addr_result: &AddressingResult) -> Result<(), Fault> {
        let result = bus.read(addr_result.address).wrapping_sub(1);
        bus.write(addr_result.address, result)?;
        self.update_zero_and_negative_flags(result);
        Ok(())
    }

    /// INX - Increment X Register
    pub fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// INY - Increment Y Register
    pub fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    /// DEX - Decrement X Register
    pub fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// DEY - Decrement Y Register
    pub fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }
}
