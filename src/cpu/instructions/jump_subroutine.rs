// Jump and subroutine instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Fault;

impl Cpu {
    /// JMP - Jump
    ///
    /// The addressing layer already resolved absolute or indirect (with
    /// the page-wrap bug) to an effective address.
    pub fn jmp(&mut self, addr_result: &AddressingResult) {
        self.pc = addr_result.address;
    }

    /// JSR - Jump to Subroutine
    ///
    /// Pushes the address of the instruction's last byte (PC-1 after the
    /// operand fetch), then jumps. RTS undoes the bias.
    pub fn jsr(&mut self, bus: &mut Bus, addr_result: &AddressingResult) -> Result<(), Fault> {
        self.stack_push_u16(bus, self.pc.wrapping_sub(1))?;
        self.pc = addr_result.address;
        Ok(())
    }

    /// RTS - Return from Subroutine
    pub fn rts(&mut self, bus: &mut Bus) {
        self.pc = self.stack_pull_u16(bus).wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::addressing::AddressingResult;
    use crate::cpu::Cpu;

    #[test]
    fn test_jmp() {
        let mut cpu = Cpu::new();
        cpu.jmp(&AddressingResult::new(0x1234));
        assert_eq!(cpu.pc, 0x1234);
    }

    #[test]
    fn test_jsr_rts_roundtrip() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::for_tests();
        let initial_sp = cpu.sp;

        // As if JSR's operand bytes ended at $0202
        cpu.pc = 0x0203;
        cpu.jsr(&mut bus, &AddressingResult::new(0x0300)).unwrap();

        assert_eq!(cpu.pc, 0x0300);
        assert_eq!(cpu.sp, initial_sp.wrapping_sub(2));

        cpu.rts(&mut bus);
        assert_eq!(cpu.pc, 0x0203, "RTS resumes after the JSR");
        assert_eq!(cpu.sp, initial_sp);
    }
}
